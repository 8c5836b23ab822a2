//! Wellbeing statistics
//!
//! Mock usage data and the pure functions that shape it per time range.

pub mod aggregator;
pub mod format;
pub mod trend;
pub mod types;

// Re-export commonly used types
pub use aggregator::{goal_progress, snapshot_for};
pub use format::format_minutes;
pub use trend::{week_label, TrendBar};
pub use types::{AppUsageEntry, DailyUsageEntry, StatsSnapshot, TimeRange};
