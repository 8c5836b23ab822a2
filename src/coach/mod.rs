//! Coach application state
//!
//! The advice lifecycle state machine, the application-state record with its
//! pure reducer, and the async session that feeds request completions back
//! into the reducer.

pub mod lifecycle;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use lifecycle::{AdviceStatus, LifecycleEvent};
pub use session::CoachSession;
pub use state::{reduce, Action, AppState, Notification, NotificationKind, StalePolicy, View};
