//! Application state and reducer
//!
//! All dashboard state lives in one [`AppState`] record. It changes only
//! through [`reduce`], which maps `(state, action)` to a new state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::lifecycle::{AdviceStatus, LifecycleEvent};
use crate::advice::AdviceOutcome;
use crate::stats::{snapshot_for, StatsSnapshot, TimeRange};

/// Message shown after an advice request succeeds
pub const GENERATED_MESSAGE: &str = "Coach generated new insights!";

/// Message shown when the fallback tips were used
pub const FALLBACK_MESSAGE: &str = "Failed to connect to AI Coach";

/// Active dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    WeeklyInsights,
    Settings,
    AiCoach,
}

/// How completions of overlapping requests are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Only the most recently issued request may update the advice list
    #[default]
    LatestIssued,
    /// Every completion is applied; whichever settles last wins
    LastSettled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectRange(TimeRange),
    Navigate(View),
    /// Issue a new advice request; switches to the coach view immediately
    RequestAdvice,
    /// A request finished
    AdviceSettled { seq: u64, outcome: AdviceOutcome },
    /// Clear the notification with this id, if still shown
    DismissNotification { id: u64 },
}

/// Complete dashboard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub view: View,
    pub range: TimeRange,
    pub stats: StatsSnapshot,
    pub advice: Vec<String>,
    pub status: AdviceStatus,
    /// Cause of the fallback behind the current advice, if any
    pub fallback_cause: Option<String>,
    pub notification: Option<Notification>,
    pub policy: StalePolicy,
    /// Sequence number of the most recently issued request (0 = none)
    pub latest_request: u64,
    /// Requests issued but not yet settled
    pub in_flight: usize,
    next_notification_id: u64,
}

impl AppState {
    pub fn new(range: TimeRange, policy: StalePolicy) -> Self {
        Self {
            view: View::Dashboard,
            range,
            stats: snapshot_for(range),
            advice: Vec::new(),
            status: AdviceStatus::Idle,
            fallback_cause: None,
            notification: None,
            policy,
            latest_request: 0,
            in_flight: 0,
            next_notification_id: 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == AdviceStatus::Loading
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notification = Some(Notification {
            id: self.next_notification_id,
            kind,
            message: message.to_string(),
        });
        self.next_notification_id += 1;
    }

    fn apply_outcome(&mut self, outcome: AdviceOutcome) {
        let (kind, message) = if outcome.is_fallback() {
            (NotificationKind::Error, FALLBACK_MESSAGE)
        } else {
            (NotificationKind::Success, GENERATED_MESSAGE)
        };
        self.fallback_cause = outcome.cause().map(str::to_string);
        self.advice = outcome.into_tips();
        self.notify(kind, message);
    }

    fn settle_status(&mut self, fell_back: bool) {
        let event = if fell_back {
            LifecycleEvent::FellBack
        } else {
            LifecycleEvent::Generated
        };
        match self.status.transition(event) {
            Ok(next) => self.status = next,
            Err(e) => warn!(error = %e, "ignoring lifecycle transition"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TimeRange::default(), StalePolicy::default())
    }
}

/// Apply an action to a state, returning the next state
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::SelectRange(range) => {
            next.range = range;
            next.stats = snapshot_for(range);
        }
        Action::Navigate(view) => {
            next.view = view;
        }
        Action::RequestAdvice => {
            next.latest_request += 1;
            next.in_flight += 1;
            next.view = View::AiCoach;
            match next.status.transition(LifecycleEvent::Request) {
                Ok(status) => next.status = status,
                Err(e) => warn!(error = %e, "ignoring lifecycle transition"),
            }
        }
        Action::AdviceSettled { seq, outcome } => {
            if seq == 0 || seq > next.latest_request || next.in_flight == 0 {
                warn!(seq, "completion for a request that was never issued");
                return next;
            }
            next.in_flight -= 1;
            let fell_back = outcome.is_fallback();

            match next.policy {
                StalePolicy::LatestIssued => {
                    if seq != next.latest_request {
                        debug!(seq, latest = next.latest_request, "discarding stale advice");
                        return next;
                    }
                    next.apply_outcome(outcome);
                    next.settle_status(fell_back);
                }
                StalePolicy::LastSettled => {
                    next.apply_outcome(outcome);
                    // Older completions only count once the latest has settled
                    if seq == next.latest_request || next.status != AdviceStatus::Loading {
                        next.settle_status(fell_back);
                    }
                }
            }
        }
        Action::DismissNotification { id } => {
            if next.notification.as_ref().map(|n| n.id) == Some(id) {
                next.notification = None;
            }
        }
    }

    next
}
