//! Terminal rendering for the dashboard views
//!
//! Render functions return strings so views can be tested without a
//! terminal; `print_*` helpers write them to stdout.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::coach::{AdviceStatus, AppState, Notification, NotificationKind, View};
use crate::stats::{goal_progress, StatsSnapshot, TrendBar};

/// Width of a full-height trend bar, in cells
const BAR_WIDTH: usize = 30;

/// Enable or disable ANSI colors globally
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Dashboard view: headline figures and top apps
pub fn render_stats(snapshot: &StatsSnapshot) -> String {
    let mut out = String::new();
    let change = snapshot.change_label();
    let change = if snapshot.change_percent <= 0 {
        change.green()
    } else {
        change.red()
    };

    out.push_str(&format!(
        "{} ({})\n",
        "Screen Time".bold().cyan(),
        snapshot.range
    ));
    out.push_str(&format!(
        "  Total:           {}  {} {}\n",
        snapshot.total_screen_time().bold(),
        change,
        snapshot.range.comparison_label().dimmed()
    ));
    out.push_str(&format!(
        "  Daily average:   {}\n",
        snapshot.daily_average()
    ));
    out.push_str(&format!("  Pickups:         {}\n", snapshot.total_pickups));
    out.push_str(&format!(
        "  Longest session: {}\n",
        snapshot.longest_session()
    ));
    out.push_str(&format!(
        "  Daily goal:      {}%\n",
        goal_progress(snapshot.range)
    ));

    out.push_str(&format!("\n{}\n", "Top Apps".bold().cyan()));
    for (i, app) in snapshot.top_apps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<12} {}\n",
            i + 1,
            app.name,
            app.time().dimmed()
        ));
    }

    out
}

/// Weekly insights view: bar chart of the trend
pub fn render_trends(snapshot: &StatsSnapshot, week_label: &str) -> String {
    let mut out = format!(
        "{}  {}\n  Average focus time: {}\n\n",
        "Trends".bold().cyan(),
        week_label.dimmed(),
        snapshot.daily_average().bold()
    );

    for bar in TrendBar::from_week(&snapshot.weekly_trend) {
        let filled = (bar.height_percent as usize * BAR_WIDTH + 50) / 100;
        let cells = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        let cells = if bar.is_current {
            cells.green().bold()
        } else {
            cells.green().dimmed()
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            bar.day,
            cells,
            crate::stats::format_minutes(bar.minutes)
        ));
    }

    out
}

/// Coach view: tips or loading state
pub fn render_advice(state: &AppState) -> String {
    let mut out = format!("{}\n", "Coach Intelligence".bold().cyan());

    match state.status {
        AdviceStatus::Idle => {
            out.push_str(&format!(
                "  {}\n",
                "No insights yet. Ask the coach for advice.".dimmed()
            ));
        }
        AdviceStatus::Loading if state.advice.is_empty() => {
            out.push_str(&format!("  {}\n", "Analyzing your usage...".yellow()));
        }
        _ => {
            for (i, tip) in state.advice.iter().enumerate() {
                out.push_str(&format!("  {} {}\n", format!("{}.", i + 1).green().bold(), tip));
            }
            if state.status == AdviceStatus::Failed {
                out.push_str(&format!(
                    "  {}\n",
                    "(offline tips; the coach could not be reached)".dimmed()
                ));
            }
        }
    }

    out
}

/// Settings view
pub fn render_settings(model: &str, state: &AppState) -> String {
    format!(
        "{}\n  Model:        {}\n  Range:        {}\n  Stale policy: {:?}\n",
        "Preferences".bold().cyan(),
        model,
        state.range,
        state.policy
    )
}

/// One-line toast
pub fn render_notification(note: &Notification) -> String {
    match note.kind {
        NotificationKind::Success => format!("✔ {}", note.message).green().bold().to_string(),
        NotificationKind::Error => format!("✖ {}", note.message).red().bold().to_string(),
    }
}

/// Render whichever view is active
pub fn render_view(state: &AppState, model: &str, week_label: &str) -> String {
    match state.view {
        View::Dashboard => render_stats(&state.stats),
        View::WeeklyInsights => render_trends(&state.stats, week_label),
        View::Settings => render_settings(model, state),
        View::AiCoach => render_advice(state),
    }
}

/// Spinner shown while the coach is thinking
pub fn advice_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Coach is analyzing your usage...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
