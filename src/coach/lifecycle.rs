//! Advice request lifecycle
//!
//! Finite state machine for the advice panel:
//!
//! ```text
//! Idle ──Request──▶ Loading ──Generated──▶ Success
//!                      │  ▲
//!                      │  └─Request (another request while one is in flight)
//!                      └──FellBack──▶ Failed
//! Success | Failed ──Request──▶ Loading
//! Success | Failed ──Generated/FellBack──▶ Success/Failed (late completion)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CoachError, Result};

/// Advice panel states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdviceStatus {
    /// Nothing requested yet
    #[default]
    Idle,

    /// At least one request is in flight
    Loading,

    /// Latest applied result came from the model
    Success,

    /// Latest applied result is the fallback
    Failed,
}

/// Events that drive the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// User asked for advice
    Request,

    /// Model produced tips
    Generated,

    /// Fallback tips were used
    FellBack,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl AdviceStatus {
    /// Attempt a transition
    pub fn transition(&self, event: LifecycleEvent) -> Result<AdviceStatus> {
        use AdviceStatus::*;
        use LifecycleEvent::*;

        let next = match (self, event) {
            (_, Request) => Loading,
            (Loading | Success | Failed, Generated) => Success,
            (Loading | Success | Failed, FellBack) => Failed,

            (from, event) => {
                return Err(CoachError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: event.to_string(),
                    reason: "no request has been issued".to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            AdviceStatus::Idle => "Idle",
            AdviceStatus::Loading => "Analyzing usage",
            AdviceStatus::Success => "Insights ready",
            AdviceStatus::Failed => "Offline tips",
        }
    }
}
