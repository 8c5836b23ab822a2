//! Statistics data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::format::format_minutes;

/// Time range the dashboard is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Today, TimeRange::Week, TimeRange::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }

    /// Label for the change-vs-previous-period figure
    pub fn comparison_label(&self) -> &'static str {
        match self {
            TimeRange::Today => "vs yesterday",
            TimeRange::Week => "vs last week",
            TimeRange::Month => "vs last month",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "day" => Ok(TimeRange::Today),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            other => Err(format!(
                "unknown time range '{}' (expected today, week or month)",
                other
            )),
        }
    }
}

/// Usage of a single app over the selected period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsageEntry {
    pub id: String,
    pub name: String,
    pub minutes: u32,
    pub icon: String,
    pub color: String,
}

impl AppUsageEntry {
    pub fn new(id: &str, name: &str, minutes: u32, icon: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            minutes,
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Formatted usage, always derived from `minutes`
    pub fn time(&self) -> String {
        format_minutes(self.minutes)
    }
}

/// One bar of the weekly trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsageEntry {
    /// Single-letter weekday label; not unique within a week
    pub day: String,
    pub minutes: u32,
}

impl DailyUsageEntry {
    pub fn new(day: &str, minutes: u32) -> Self {
        Self {
            day: day.to_string(),
            minutes,
        }
    }
}

/// Immutable aggregate of wellbeing metrics for one time range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub range: TimeRange,
    pub total_screen_minutes: u32,
    /// Signed percent change against the previous period
    pub change_percent: i32,
    pub daily_average_minutes: u32,
    pub total_pickups: u32,
    pub longest_session_minutes: u32,
    /// Most-used first
    pub top_apps: Vec<AppUsageEntry>,
    pub weekly_trend: Vec<DailyUsageEntry>,
}

impl StatsSnapshot {
    pub fn total_screen_time(&self) -> String {
        format_minutes(self.total_screen_minutes)
    }

    pub fn daily_average(&self) -> String {
        format_minutes(self.daily_average_minutes)
    }

    pub fn longest_session(&self) -> String {
        format_minutes(self.longest_session_minutes)
    }

    /// Change rendered with an explicit sign, e.g. `-12%` or `+2%`
    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_percent)
    }

    /// Highest-usage app, if any
    pub fn top_app(&self) -> Option<&AppUsageEntry> {
        self.top_apps.first()
    }
}
