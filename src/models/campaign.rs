use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Optional promotional window (grand opening, seasonal menu launch, ...)
/// announced with a countdown until it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWindow {
    pub title: String,
    pub starts_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Countdown {
    Upcoming { days: i64, hours: i64, minutes: i64 },
    Running,
    Over,
}
