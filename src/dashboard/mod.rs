//! Interactive dashboard
//!
//! A line-driven front end over [`CoachSession`]: each command becomes an
//! [`Action`] or an advice request, and the active view is re-rendered.
//!
//! Input is read on a blocking thread and forwarded over a channel, so the
//! loop keeps accepting commands while advice requests are in flight.
//! Completions are announced as they arrive.

pub mod commands;
pub mod input;

use anyhow::Result;
use chrono::Local;
use colored::*;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::coach::{Action, CoachSession, View};
use crate::display;
use crate::stats::week_label;
use commands::{help_entries, parse, Command};
use input::InputHandler;

/// Dashboard options taken from configuration
pub struct DashboardOptions {
    pub model: String,
    pub history_path: Option<PathBuf>,
}

/// Run the dashboard until the user exits
pub async fn run(mut session: CoachSession, options: DashboardOptions) -> Result<()> {
    show_banner(&options.model);
    render(&session, &options);

    let (line_tx, mut lines) = mpsc::channel::<String>(1);
    let (ack_tx, ack_rx) = std_mpsc::channel::<()>();
    let history = options.history_path.clone();
    let reader = tokio::task::spawn_blocking(move || read_lines(history, line_tx, ack_rx));

    let mut last_note = None;
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    break;
                };
                if !handle_line(&mut session, &line, &options) {
                    break;
                }
                // Prompt again only once the command's output is printed
                if ack_tx.send(()).is_err() {
                    break;
                }
            }
            Some(action) = session.next_event() => {
                let note = session.state().notification.as_ref().map(|n| n.id);
                if matches!(action, Action::AdviceSettled { .. }) && note.is_some() && note != last_note {
                    println!();
                    if session.state().view == View::AiCoach {
                        render(&session, &options);
                    } else if let Some(note) = &session.state().notification {
                        println!("{}", display::render_notification(note));
                    }
                }
                last_note = note;
            }
        }
    }

    drop(ack_tx);
    drop(lines);
    reader.await??;
    println!("{}", "Goodbye!".green());
    Ok(())
}

/// Apply one line of input to the session
///
/// Returns `false` when the user asked to leave. Never waits on an advice
/// request; its result arrives through [`CoachSession::next_event`].
pub fn handle_line(session: &mut CoachSession, line: &str, options: &DashboardOptions) -> bool {
    match parse(line) {
        Command::Exit => return false,
        Command::Help => show_help(),
        Command::Clear => print!("\x1B[2J\x1B[1;1H"),
        Command::Status => show_status(session),
        Command::Range(range) => {
            session.dispatch(Action::SelectRange(range));
            render(session, options);
        }
        Command::Show(view) => {
            session.dispatch(Action::Navigate(view));
            render(session, options);
        }
        Command::Advice => {
            let seq = session.request_advice();
            debug!(seq, "dashboard requested advice");
            render(session, options);
        }
        Command::Unknown { input, reason } => {
            println!("{}", format!("Unknown command: {}", input).red());
            if let Some(reason) = reason {
                println!("{}", reason.yellow());
            }
            println!("Type {} for available commands", "help".cyan());
        }
    }
    true
}

/// Blocking input loop: sends each line and waits for it to be handled
fn read_lines(
    history: Option<PathBuf>,
    lines: mpsc::Sender<String>,
    acks: std_mpsc::Receiver<()>,
) -> Result<()> {
    let mut input = match history {
        Some(path) => InputHandler::with_history(path)?,
        None => InputHandler::new()?,
    };

    while let Some(line) = input.read_line()? {
        if line.is_empty() {
            continue;
        }
        if lines.blocking_send(line).is_err() || acks.recv().is_err() {
            break;
        }
    }

    input.save_history()
}

fn render(session: &CoachSession, options: &DashboardOptions) {
    let state = session.state();
    if let Some(note) = &state.notification {
        println!("{}", display::render_notification(note));
    }
    let label = week_label(Local::now().date_naive());
    println!("\n{}", display::render_view(state, &options.model, &label));
}

fn show_banner(model: &str) {
    let width = 60;
    println!("\n{}", "=".repeat(width).cyan());
    println!("{}", "  Wellbeing Coach - Digital Wellbeing Dashboard".bold().cyan());
    println!("{}", format!("  Model: {}", model).dimmed());
    println!("{}\n", "=".repeat(width).cyan());
    println!(
        "Type {} for commands, {} to quit",
        "help".green(),
        "exit".green()
    );
}

fn show_help() {
    println!("\n{}", "Available Commands:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    for (cmd, desc) in help_entries() {
        println!("  {:<24} {}", cmd.green(), desc);
    }
    println!();
}

fn show_status(session: &CoachSession) {
    let state = session.state();
    println!("\n{}", "Status:".bold().cyan());
    println!("  Range:     {}", state.range.to_string().green());
    println!("  View:      {:?}", state.view);
    println!("  Coach:     {}", state.status.display_name().green());
    println!("  Requests:  {} issued, {} in flight", state.latest_request, state.in_flight);
    if let Some(cause) = &state.fallback_cause {
        println!("  Fallback:  {}", cause.dimmed());
    }
    println!();
}
