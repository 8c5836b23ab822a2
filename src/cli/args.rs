//! Command-line argument parsing for the wellbeing coach
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::stats::TimeRange;

/// Wellbeing Coach - screen-time dashboard with AI coaching tips
#[derive(Parser, Debug)]
#[command(name = "wellbeing-coach")]
#[command(version)]
#[command(about = "Screen-time dashboard with AI coaching tips", long_about = None)]
pub struct Args {
    /// Time range to show: today, week or month
    #[arg(short, long, global = true)]
    pub range: Option<TimeRange>,

    /// Model used for coaching tips
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level: -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand (defaults to the interactive dashboard)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show screen-time statistics
    Stats,

    /// Show the weekly usage trend
    Trends,

    /// Ask the coach for tips based on the current statistics
    Advice {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive dashboard
    Dashboard,

    /// Display current configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Subcommand to run
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard)
    }

    /// Apply flag overrides on top of loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(range) = self.range {
            config.coach.default_range = range;
        }
        if let Some(model) = &self.model {
            config.gemini.model = model.clone();
        }
        if self.no_color {
            config.display.color_output = false;
        }
        if self.quiet {
            config.display.show_spinner = false;
        }
    }
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}
