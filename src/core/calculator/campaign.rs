use crate::models::campaign::{CampaignWindow, Countdown};
use chrono::NaiveDateTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn countdown(campaign: &CampaignWindow, now: NaiveDateTime) -> Countdown {
    if now < campaign.starts_at {
        let left = (campaign.starts_at - now).num_minutes();
        return Countdown::Upcoming {
            days: left / MINUTES_PER_DAY,
            hours: (left % MINUTES_PER_DAY) / 60,
            minutes: left % 60,
        };
    }

    match campaign.ends_at {
        Some(end) if now >= end => Countdown::Over,
        _ => Countdown::Running,
    }
}
