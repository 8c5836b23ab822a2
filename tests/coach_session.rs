//! Coach session: overlapping requests, view switching, notifications

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use wellbeing_coach::advice::{AdviceBackend, AdviceRequest, AdviceService};
use wellbeing_coach::coach::{
    Action, AdviceStatus, CoachSession, NotificationKind, StalePolicy, View,
};
use wellbeing_coach::config::CoachConfig;
use wellbeing_coach::dashboard::{handle_line, DashboardOptions};
use wellbeing_coach::stats::TimeRange;
use wellbeing_coach::{CoachError, Result};

/// Backend whose responses are released by the test, keyed by a prompt marker
#[derive(Default)]
struct GatedBackend {
    gates: Mutex<HashMap<&'static str, oneshot::Receiver<Result<String>>>>,
}

impl GatedBackend {
    fn gate(&self, marker: &'static str) -> oneshot::Sender<Result<String>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(marker, rx);
        tx
    }
}

#[async_trait]
impl AdviceBackend for GatedBackend {
    async fn generate(&self, request: &AdviceRequest) -> Result<String> {
        let rx = {
            let mut gates = self.gates.lock().unwrap();
            let marker = gates
                .keys()
                .copied()
                .find(|m| request.prompt.contains(m))
                .expect("no gate for prompt");
            gates.remove(marker).unwrap()
        };
        rx.await.unwrap_or(Err(CoachError::EmptyResponse))
    }
}

fn session(policy: StalePolicy, backend: Arc<GatedBackend>) -> CoachSession {
    let config = CoachConfig {
        default_range: TimeRange::Today,
        stale_policy: policy,
        notification_ttl_ms: 0,
    };
    CoachSession::new(AdviceService::new(backend), &config)
}

/// Issue a Today request then a Week request; release Week first, then Today
async fn run_out_of_order(policy: StalePolicy) -> CoachSession {
    let backend = Arc::new(GatedBackend::default());
    let today_gate = backend.gate("6h 42m");
    let week_gate = backend.gate("38h 12m");

    let mut session = session(policy, backend);
    let first = session.request_advice();
    session.dispatch(Action::SelectRange(TimeRange::Week));
    let second = session.request_advice();
    assert_eq!((first, second), (1, 2));
    assert_eq!(session.state().in_flight, 2);

    week_gate.send(Ok(r#"["week tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();

    today_gate.send(Ok(r#"["today tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();

    assert_eq!(session.state().in_flight, 0);
    session
}

#[tokio::test]
async fn test_last_settled_policy_keeps_last_completion() {
    let session = run_out_of_order(StalePolicy::LastSettled).await;
    assert_eq!(session.state().advice, vec!["today tip"]);
    assert_eq!(session.state().status, AdviceStatus::Success);
}

#[tokio::test]
async fn test_latest_issued_policy_discards_stale_completion() {
    let session = run_out_of_order(StalePolicy::LatestIssued).await;
    assert_eq!(session.state().advice, vec!["week tip"]);
    assert_eq!(session.state().status, AdviceStatus::Success);
}

#[tokio::test]
async fn test_view_switches_before_completion() {
    let backend = Arc::new(GatedBackend::default());
    let gate = backend.gate("6h 42m");
    let mut session = session(StalePolicy::LatestIssued, backend);

    session.request_advice();
    assert_eq!(session.state().view, View::AiCoach);
    assert!(session.state().is_loading());

    session.dispatch(Action::Navigate(View::WeeklyInsights));
    assert_eq!(session.state().view, View::WeeklyInsights);

    gate.send(Ok(r#"["a","b","c"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();

    let state = session.state();
    assert_eq!(state.advice, vec!["a", "b", "c"]);
    assert_eq!(state.view, View::WeeklyInsights);
    assert_eq!(
        state.notification.as_ref().unwrap().kind,
        NotificationKind::Success
    );
}

#[tokio::test]
async fn test_backend_failure_shows_fallback_and_error() {
    let backend = Arc::new(GatedBackend::default());
    let gate = backend.gate("6h 42m");
    let mut session = session(StalePolicy::LatestIssued, backend);

    session.request_advice();
    gate.send(Err(CoachError::ApiStatus {
        status: 401,
        body: "bad key".to_string(),
    }))
    .unwrap();
    session.next_event().await.unwrap();

    let state = session.state();
    assert_eq!(state.status, AdviceStatus::Failed);
    assert_eq!(state.advice.len(), 3);
    assert!(state.fallback_cause.as_ref().unwrap().contains("401"));
    assert_eq!(
        state.notification.as_ref().unwrap().kind,
        NotificationKind::Error
    );
}

#[tokio::test]
async fn test_notification_expires() {
    let backend = Arc::new(GatedBackend::default());
    let gate = backend.gate("6h 42m");
    let config = CoachConfig {
        default_range: TimeRange::Today,
        stale_policy: StalePolicy::LatestIssued,
        notification_ttl_ms: 20,
    };
    let mut session = CoachSession::new(AdviceService::new(backend), &config);

    session.request_advice();
    gate.send(Ok(r#"["tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();
    assert!(session.state().notification.is_some());

    let action = session.next_event().await.unwrap();
    assert!(matches!(action, Action::DismissNotification { .. }));
    assert!(session.state().notification.is_none());
}

#[tokio::test]
async fn test_dashboard_commands_while_requests_in_flight() {
    let backend = Arc::new(GatedBackend::default());
    let today_gate = backend.gate("6h 42m");
    let week_gate = backend.gate("38h 12m");
    let mut session = session(StalePolicy::LatestIssued, backend);
    let options = DashboardOptions {
        model: "gemini-test".to_string(),
        history_path: None,
    };

    // Neither request is released yet; each command must return at once
    assert!(handle_line(&mut session, "advice", &options));
    assert!(handle_line(&mut session, "week", &options));
    assert!(handle_line(&mut session, "advice", &options));
    assert!(handle_line(&mut session, "trends", &options));

    let state = session.state();
    assert_eq!(state.in_flight, 2);
    assert_eq!(state.range, TimeRange::Week);
    assert_eq!(state.view, View::WeeklyInsights);
    assert!(state.is_loading());

    week_gate.send(Ok(r#"["week tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();
    assert_eq!(session.state().status, AdviceStatus::Success);
    assert_eq!(session.state().advice, vec!["week tip"]);

    today_gate.send(Ok(r#"["today tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();
    assert_eq!(session.state().advice, vec!["week tip"]);

    assert!(!handle_line(&mut session, "exit", &options));
}

#[tokio::test]
async fn test_last_settled_leaves_loading_when_latest_settles() {
    let backend = Arc::new(GatedBackend::default());
    let _today_gate = backend.gate("6h 42m");
    let week_gate = backend.gate("38h 12m");

    let mut session = session(StalePolicy::LastSettled, backend);
    session.request_advice();
    session.dispatch(Action::SelectRange(TimeRange::Week));
    session.request_advice();

    week_gate.send(Ok(r#"["week tip"]"#.to_string())).unwrap();
    session.next_event().await.unwrap();

    let state = session.state();
    assert_eq!(state.in_flight, 1);
    assert!(!state.is_loading());
    assert_eq!(state.status, AdviceStatus::Success);
    assert_eq!(state.advice, vec!["week tip"]);
}
