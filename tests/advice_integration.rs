//! Advice service against a local HTTP endpoint
//!
//! Exercises the real Gemini client end to end without network access.

mod common;

use common::{gemini_body, serve_once};
use std::sync::Arc;
use std::time::Duration;
use wellbeing_coach::advice::{AdviceOutcome, AdviceService, GeminiClient, FALLBACK_TIPS};
use wellbeing_coach::stats::{snapshot_for, TimeRange};

fn service_for(base_url: &str, api_key: Option<&str>) -> AdviceService {
    let client = GeminiClient::with_config(
        base_url,
        "gemini-test",
        api_key.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap();
    AdviceService::new(Arc::new(client))
}

fn fallback() -> Vec<String> {
    FALLBACK_TIPS.iter().map(|t| t.to_string()).collect()
}

#[tokio::test]
async fn test_generated_tips_returned_verbatim() {
    let tips = r#"["Take a walk at lunch.","Mute Slack after 6pm.","Charge your phone outside the bedroom."]"#;
    let (base_url, server) = serve_once("200 OK", gemini_body(tips)).await;

    let outcome = service_for(&base_url, Some("test-key"))
        .request_advice(&snapshot_for(TimeRange::Today))
        .await;

    assert_eq!(
        outcome,
        AdviceOutcome::Generated {
            tips: vec![
                "Take a walk at lunch.".to_string(),
                "Mute Slack after 6pm.".to_string(),
                "Charge your phone outside the bedroom.".to_string(),
            ]
        }
    );

    let request = server.await.unwrap();
    assert!(request
        .head
        .starts_with("POST /v1beta/models/gemini-test:generateContent"));
    assert!(request.head.to_lowercase().contains("x-goog-api-key: test-key"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Top App: Chrome (3h 12m)"));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"error":"boom"}"#.to_string()).await;

    let outcome = service_for(&base_url, Some("test-key"))
        .request_advice(&snapshot_for(TimeRange::Week))
        .await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.tips(), fallback().as_slice());
    assert!(outcome.cause().unwrap().contains("500"));
}

#[tokio::test]
async fn test_unparseable_text_falls_back() {
    let (base_url, _server) =
        serve_once("200 OK", gemini_body("Sure! Here are three tips: ...")).await;

    let outcome = service_for(&base_url, Some("test-key"))
        .request_advice(&snapshot_for(TimeRange::Month))
        .await;

    assert_eq!(outcome.clone().into_tips(), fallback());
    assert!(outcome.is_fallback());
}

#[tokio::test]
async fn test_non_json_envelope_falls_back() {
    let (base_url, _server) = serve_once("200 OK", "<html>gateway</html>".to_string()).await;

    let outcome = service_for(&base_url, Some("test-key"))
        .request_advice(&snapshot_for(TimeRange::Today))
        .await;

    assert!(outcome.is_fallback());
}

#[tokio::test]
async fn test_connection_refused_falls_back() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = service_for(&format!("http://{}", addr), Some("test-key"))
        .request_advice(&snapshot_for(TimeRange::Today))
        .await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.tips().len(), 3);
}

#[tokio::test]
async fn test_missing_key_falls_back() {
    let outcome = service_for("http://127.0.0.1:9", None)
        .request_advice(&snapshot_for(TimeRange::Today))
        .await;

    assert!(outcome.is_fallback());
    assert!(outcome.cause().unwrap().contains("API_KEY"));
}
