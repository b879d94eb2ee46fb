pub mod backup;
pub mod cancel;
pub mod check;
pub mod config;
pub mod db;
pub mod export;
pub mod hours;
pub mod init;
pub mod list;
pub mod log;
pub mod reserve;
pub mod slots;
pub mod status;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured store, bringing its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
