//! End-to-end tests for the generation orchestrator.
//!
//! The external contract under test: for well-formed input the service
//! never fails — it returns a provider video when the provider cooperates
//! and degrades to the curated library on any provider-path error.
//! Validation errors surface before any network activity.

use std::time::Duration;

use dream_cinema::video::{
    select, HailuoClient, PollConfig, ValidationError, VideoService, VideoSource,
};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DREAM: &str = "I was flying through golden clouds, full of joy";

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn fast_poll() -> PollConfig {
    PollConfig {
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
        growth: 1.3,
        max_poll_attempts: 5,
        network_retry_delay: Duration::from_millis(5),
        max_network_retries: 5,
    }
}

async fn service_for(server: &MockServer) -> VideoService {
    let client = HailuoClient::with_base_url("test-api-key".to_string(), server.uri())
        .unwrap()
        .with_poll_config(fast_poll());
    VideoService::new(Some(client))
}

async fn mount_healthy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "models": ["video-01"]
        })))
        .mount(server)
        .await;
}

// === Provider path ===

#[tokio::test]
async fn test_provider_success_returns_provider_video() {
    let mock_server = MockServer::start().await;
    mount_healthy(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/video_generation/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "status": "success",
            "video_url": "https://cdn.example/dream.mp4",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Provider);
    assert_eq!(result.video_url, "https://cdn.example/dream.mp4");
    assert_eq!(result.style, "watercolor");
    assert_eq!(result.duration_seconds, 6);
}

// === Degradation matrix: every provider failure falls back ===

#[tokio::test]
async fn test_unavailable_provider_falls_back() {
    let mock_server = MockServer::start().await;

    // Health probe fails; no generation endpoints are ever called.
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
    assert!(!result.video_url.is_empty());
}

#[tokio::test]
async fn test_submit_rejection_falls_back() {
    let mock_server = MockServer::start().await;
    mount_healthy(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "",
            "base_resp": {"status_code": 1002, "status_msg": "rate limit triggered"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
}

#[tokio::test]
async fn test_terminal_generation_failure_falls_back() {
    let mock_server = MockServer::start().await;
    mount_healthy(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/video_generation/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "status": "failed",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
    assert!(!result.video_url.is_empty());
}

#[tokio::test]
async fn test_poll_timeout_falls_back() {
    let mock_server = MockServer::start().await;
    mount_healthy(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/video_generation/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task-1",
            "status": "processing",
            "base_resp": {"status_code": 0, "status_msg": "ok"}
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
}

#[tokio::test]
async fn test_no_provider_configured_uses_fallback() {
    let service = VideoService::new(None);
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
    assert!(!result.video_url.is_empty());
}

// === Validation happens before any network call ===

#[tokio::test]
async fn test_short_text_is_rejected_without_network_activity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service.generate("short", &[], "watercolor", 6, "16:9").await;

    assert_eq!(result, Err(ValidationError { len: 5 }));
}

#[tokio::test]
async fn test_overlong_text_is_rejected_without_network_activity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let text = "d".repeat(501);
    let result = service.generate(&text, &[], "watercolor", 6, "16:9").await;

    assert_eq!(result, Err(ValidationError { len: 501 }));
}

// === Fallback selection semantics ===

#[tokio::test]
async fn test_unknown_style_and_tone_match_watercolor_peaceful() {
    assert_eq!(select("foo", "bar"), select("watercolor", "peaceful"));
}

#[tokio::test]
async fn test_joyful_dream_selects_joyful_fallback() {
    let service = VideoService::new(None);
    let result = service
        .generate(DREAM, &tags(&["joy"]), "watercolor", 6, "16:9")
        .await
        .unwrap();
    // The flying/joy analysis maps to the joyful tone.
    assert_eq!(result.video_url, select("watercolor", "joyful"));
}

#[tokio::test]
async fn test_dramatic_dream_selects_dramatic_fallback() {
    let service = VideoService::new(None);
    let result = service
        .generate(
            "falling into a storm, fighting through the war",
            &tags(&["fear"]),
            "cinematic",
            6,
            "16:9",
        )
        .await
        .unwrap();
    assert_eq!(result.video_url, select("cinematic", "dramatic"));
}

#[tokio::test]
async fn test_unknown_style_with_real_provider_failure_still_succeeds() {
    let mock_server = MockServer::start().await;
    mount_healthy(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/video_generation"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server).await;
    let result = service
        .generate(DREAM, &[], "no-such-style", 6, "16:9")
        .await
        .unwrap();

    assert_eq!(result.source, VideoSource::Fallback);
    // The flying dream maps to the joyful tone; unknown styles use the
    // watercolor row.
    assert_eq!(result.video_url, select("watercolor", "joyful"));
}
