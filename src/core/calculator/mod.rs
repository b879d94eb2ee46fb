pub mod campaign;
pub mod reservation;
pub mod slots;
pub mod status;
