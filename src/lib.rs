//! Wellbeing Coach
//!
//! A terminal digital-wellbeing dashboard: mock screen-time statistics per
//! time range, plus coaching tips from a hosted language model with a fixed
//! fallback when the model cannot be reached.
//!
//! # Architecture
//!
//! - **stats**: statistics snapshots and pure shaping functions
//! - **advice**: prompt, Gemini client, response parsing, fallback service
//! - **coach**: lifecycle state machine, app-state reducer, session driver
//! - **dashboard / display / cli**: terminal front end

pub mod errors;
pub mod config;
pub mod stats;
pub mod advice;
pub mod coach;

// Re-export commonly used types
pub use errors::{CoachError, Result};

// Terminal front end
pub mod cli;
pub mod dashboard;
pub mod display;
