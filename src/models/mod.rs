pub mod campaign;
pub mod locale;
pub mod reservation;
pub mod schedule;
pub mod slot;
pub mod status;
pub mod time_of_day;
pub mod window;

pub use locale::Locale;
pub use schedule::{DayHours, WeeklySchedule};
pub use time_of_day::TimeOfDay;
pub use window::TimeWindow;
