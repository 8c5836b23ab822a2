//! Weekly trend shaping for the insights view

use chrono::{Duration, NaiveDate};

use super::types::DailyUsageEntry;

/// Day highlighted as "current" in the mock week
pub const CURRENT_DAY: &str = "F";

/// One rendered bar of the weekly chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBar {
    pub day: String,
    pub minutes: u32,
    /// Height relative to the busiest day, 0..=100
    pub height_percent: u8,
    pub is_current: bool,
}

impl TrendBar {
    /// Scale a week of usage against its maximum
    pub fn from_week(week: &[DailyUsageEntry]) -> Vec<TrendBar> {
        let max = week.iter().map(|d| d.minutes).max().unwrap_or(0);

        week.iter()
            .map(|d| {
                let height_percent = if max == 0 {
                    0
                } else {
                    ((d.minutes as f64 / max as f64) * 100.0).round() as u8
                };
                TrendBar {
                    day: d.day.clone(),
                    minutes: d.minutes,
                    height_percent,
                    is_current: d.day == CURRENT_DAY,
                }
            })
            .collect()
    }
}

/// Header for the week ending on `end`, e.g. `"Oct 12 - Oct 18"`
pub fn week_label(end: NaiveDate) -> String {
    let start = end - Duration::days(6);
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}
