//! Stats aggregator
//!
//! Maps a [`TimeRange`] to a [`StatsSnapshot`]. Only the headline figures
//! change with the range; pickups, longest session, top apps and the weekly
//! trend are shared mock data.

use super::types::{AppUsageEntry, DailyUsageEntry, StatsSnapshot, TimeRange};

const TOTAL_PICKUPS: u32 = 84;
const LONGEST_SESSION_MINUTES: u32 = 100;

/// Headline figures that differ per range
struct RangeFigures {
    total_screen_minutes: u32,
    change_percent: i32,
    daily_average_minutes: u32,
    goal_progress: u8,
}

fn figures(range: TimeRange) -> RangeFigures {
    match range {
        TimeRange::Today => RangeFigures {
            total_screen_minutes: 402,
            change_percent: -12,
            daily_average_minutes: 312,
            goal_progress: 65,
        },
        TimeRange::Week => RangeFigures {
            total_screen_minutes: 2292,
            change_percent: -4,
            daily_average_minutes: 327,
            goal_progress: 45,
        },
        TimeRange::Month => RangeFigures {
            total_screen_minutes: 8525,
            change_percent: 2,
            daily_average_minutes: 285,
            goal_progress: 80,
        },
    }
}

fn mock_apps() -> Vec<AppUsageEntry> {
    vec![
        AppUsageEntry::new("1", "Chrome", 192, "public", "#4285F4"),
        AppUsageEntry::new("2", "VS Code", 125, "code", "#007ACC"),
        AppUsageEntry::new("3", "Spotify", 85, "music_note", "#1DB954"),
        AppUsageEntry::new("4", "Slack", 45, "forum", "#E01E5A"),
        AppUsageEntry::new("5", "Instagram", 32, "photo_camera", "#E1306C"),
    ]
}

fn mock_week() -> Vec<DailyUsageEntry> {
    [
        ("M", 312),
        ("T", 420),
        ("W", 245),
        ("T", 560),
        ("F", 504),
        ("S", 630),
        ("S", 385),
    ]
    .into_iter()
    .map(|(day, minutes)| DailyUsageEntry::new(day, minutes))
    .collect()
}

/// Build the snapshot for a time range
///
/// Pure: the same range always yields an identical snapshot.
pub fn snapshot_for(range: TimeRange) -> StatsSnapshot {
    let figures = figures(range);
    StatsSnapshot {
        range,
        total_screen_minutes: figures.total_screen_minutes,
        change_percent: figures.change_percent,
        daily_average_minutes: figures.daily_average_minutes,
        total_pickups: TOTAL_PICKUPS,
        longest_session_minutes: LONGEST_SESSION_MINUTES,
        top_apps: mock_apps(),
        weekly_trend: mock_week(),
    }
}

/// Percent of the daily screen-time goal shown on the progress ring
pub fn goal_progress(range: TimeRange) -> u8 {
    figures(range).goal_progress
}
