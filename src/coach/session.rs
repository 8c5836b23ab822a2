//! Coach session driver
//!
//! Owns the [`AppState`] and runs advice requests as tokio tasks. Completions
//! and notification expiries come back as [`Action`]s over a bounded channel
//! and are applied through the reducer one at a time, so the state has a
//! single writer.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use super::state::{reduce, Action, AppState};
use crate::advice::AdviceService;
use crate::config::CoachConfig;

/// Capacity of the completion channel
const CHANNEL_CAPACITY: usize = 100;

pub struct CoachSession {
    state: AppState,
    service: AdviceService,
    sender: mpsc::Sender<Action>,
    receiver: mpsc::Receiver<Action>,
    notification_ttl: Duration,
}

impl CoachSession {
    pub fn new(service: AdviceService, config: &CoachConfig) -> Self {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            state: AppState::new(config.default_range, config.stale_policy),
            service,
            sender,
            receiver,
            notification_ttl: Duration::from_millis(config.notification_ttl_ms),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action and start the expiry timer for any new notification
    pub fn dispatch(&mut self, action: Action) {
        let before = self.state.notification.as_ref().map(|n| n.id);
        self.state = reduce(&self.state, action);

        if let Some(note) = &self.state.notification {
            if Some(note.id) != before && !self.notification_ttl.is_zero() {
                let id = note.id;
                let ttl = self.notification_ttl;
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(ttl).await;
                    let _ = sender.send(Action::DismissNotification { id }).await;
                });
            }
        }
    }

    /// Issue an advice request for the current snapshot
    ///
    /// Returns the request's sequence number. The view switches to the coach
    /// before this returns; the result arrives later through
    /// [`next_event`](Self::next_event).
    pub fn request_advice(&mut self) -> u64 {
        self.dispatch(Action::RequestAdvice);
        let seq = self.state.latest_request;
        let snapshot = self.state.stats.clone();
        let service = self.service.clone();
        let sender = self.sender.clone();

        debug!(seq, range = %snapshot.range, "advice request issued");
        tokio::spawn(async move {
            let outcome = service.request_advice(&snapshot).await;
            let _ = sender.send(Action::AdviceSettled { seq, outcome }).await;
        });

        seq
    }

    /// Wait for the next completion or expiry and apply it
    pub async fn next_event(&mut self) -> Option<Action> {
        let action = self.receiver.recv().await?;
        self.dispatch(action.clone());
        Some(action)
    }
}
