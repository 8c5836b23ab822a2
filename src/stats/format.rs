//! Duration formatting
//!
//! Minutes are the canonical unit everywhere; this is the only place that
//! turns them into display strings.

/// Format a minute count as `"6h 42m"`, or `"45m"` below one hour
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{}m", rest)
    } else {
        format!("{}h {}m", hours, rest)
    }
}
