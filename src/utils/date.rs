use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD HH:MM` (a `T` separator is accepted too).
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidDate(format!("'{s}' (expected YYYY-MM-DD HH:MM)")))
}

/// Inclusive date bounds for a period expression:
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or `A:B` with any of those on each side.
pub fn resolve_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if end < start {
            return Err(AppError::InvalidDate(format!(
                "period '{p}' ends before it starts"
            )));
        }
        return Ok((start, end));
    }
    period_bounds(p)
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(format!("invalid period: {p}"));

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first).ok_or_else(invalid)?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
