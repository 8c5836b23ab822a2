//! Prompt construction

use crate::errors::{CoachError, Result};
use crate::stats::StatsSnapshot;

/// System instruction sent with every advice request
pub const SYSTEM_INSTRUCTION: &str = "You are a professional digital wellbeing coach. \
Be concise, encouraging, and provide very specific actionable advice. \
Format your response as a JSON array of strings.";

/// Build the user prompt for a snapshot
///
/// Fails with [`CoachError::EmptyTopApps`] when there is no app to name.
pub fn build_prompt(snapshot: &StatsSnapshot) -> Result<String> {
    let top = snapshot.top_app().ok_or(CoachError::EmptyTopApps)?;

    Ok(format!(
        "Analyze these wellbeing stats and provide 3 short, actionable tips to improve digital health.
Stats:
Total Screen Time: {}
Longest Session: {}
Top App: {} ({})
Change {}: {}
",
        snapshot.total_screen_time(),
        snapshot.longest_session(),
        top.name,
        top.time(),
        snapshot.range.comparison_label(),
        snapshot.change_label(),
    ))
}
