//! Dashboard commands
//!
//! Parses a line of input into a [`Command`]. A leading `/` is optional.

use crate::coach::View;
use crate::stats::TimeRange;

/// Dashboard command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Range(TimeRange),
    Show(View),
    Advice,
    Status,
    Clear,
    Exit,
    Unknown { input: String, reason: Option<String> },
}

/// Parse input into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let parts: Vec<&str> = body.split_whitespace().collect();

    let unknown = |reason: Option<String>| Command::Unknown {
        input: trimmed.to_string(),
        reason,
    };

    let Some(head) = parts.first() else {
        return unknown(None);
    };

    match head.to_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "exit" | "quit" | "q" => Command::Exit,
        "advice" | "coach" | "ai" => Command::Advice,
        "status" => Command::Status,
        "clear" | "cls" => Command::Clear,
        "today" | "week" | "month" => match head.parse() {
            Ok(range) => Command::Range(range),
            Err(e) => unknown(Some(e)),
        },
        "range" => match parts.get(1) {
            Some(arg) => match arg.parse() {
                Ok(range) => Command::Range(range),
                Err(e) => unknown(Some(e)),
            },
            None => unknown(Some("usage: range <today|week|month>".to_string())),
        },
        "stats" | "home" | "dashboard" => Command::Show(View::Dashboard),
        "trends" | "insights" => Command::Show(View::WeeklyInsights),
        "settings" | "prefs" => Command::Show(View::Settings),
        "tips" => Command::Show(View::AiCoach),
        _ => unknown(None),
    }
}

/// Help lines: (command, description)
pub fn help_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("stats, home", "Show the dashboard"),
        ("trends", "Show the weekly trend"),
        ("today | week | month", "Change the time range"),
        ("advice", "Ask the coach for tips"),
        ("tips", "Show the last tips"),
        ("settings", "Show preferences"),
        ("status", "Show request status"),
        ("clear, cls", "Clear screen"),
        ("exit, quit, q", "Exit the dashboard"),
    ]
}
