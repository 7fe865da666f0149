//! Edit session and six-view batch on top of the generator

use crate::common::*;
use nano_banana::core::catalog::{VIEW_ANGLES, find_preset};
use nano_banana::core::generation::{GenerateResponse, GenerationProxy, NO_IMAGE_DATA};
use nano_banana::core::session::{EditSession, SessionError, ViewMode};
use nano_banana::core::views::{AngleStatus, ViewBatch, ViewBatchError};
use nano_banana::GatewayError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_process_sends_trimmed_prompt_and_original() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_ok(GenerateResponse::from_base64("BBBB"));
    let mut session = EditSession::new(stub.clone());

    session.upload(tiny_png_data_url());
    session.set_prompt("  sharpen the edges  ");
    let processed = session.process().await.unwrap();

    assert_eq!(processed, "data:image/png;base64,BBBB");
    assert_eq!(session.images().processed(), Some("data:image/png;base64,BBBB"));
    assert_eq!(session.view_mode(), ViewMode::Compare);
    assert!(session.error().is_none());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].prompt, "sharpen the edges");
    assert_eq!(requests[0].reference_image.as_deref(), Some(tiny_png_data_url().as_str()));

    let props = session.slider_props().unwrap();
    assert_eq!(props.before_image, tiny_png_data_url());
    assert_eq!(props.after_image, "data:image/png;base64,BBBB");
}

#[tokio::test]
async fn test_process_requires_image_and_prompt() {
    let stub = Arc::new(StubGenerator::new());
    let mut session = EditSession::new(stub.clone());

    session.set_prompt("anything");
    assert!(matches!(session.process().await, Err(SessionError::MissingInput)));

    session.upload(tiny_png_data_url());
    session.set_prompt("   ");
    assert!(matches!(session.process().await, Err(SessionError::MissingInput)));
    assert!(session.error().is_some());
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_new_upload_clears_previous_result() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_ok(GenerateResponse::from_url("https://x/1.png"));
    let mut session = EditSession::new(stub.clone());

    session.upload(tiny_png_data_url());
    session.apply_preset(find_preset("white-bg").unwrap());
    session.process().await.unwrap();
    assert!(session.slider_props().is_some());

    session.upload("data:image/jpeg;base64,AAAA");
    assert!(session.images().processed().is_none());
    assert!(session.prompt().is_empty());
    assert_eq!(session.view_mode(), ViewMode::Original);
    assert!(session.slider_props().is_none());

    session.set_view_mode(ViewMode::Compare);
    assert_eq!(session.view_mode(), ViewMode::Original);
}

#[tokio::test]
async fn test_generator_failure_is_recorded() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_err(GatewayError::upstream(429, "quota exceeded"));
    let mut session = EditSession::new(stub);

    session.upload(tiny_png_data_url());
    session.set_prompt("make it pop");
    let err = session.process().await.unwrap_err();

    assert!(matches!(
        err,
        SessionError::Generation(GatewayError::Upstream { status: 429, .. })
    ));
    assert!(session.error().unwrap().contains("quota exceeded"));
    assert!(session.images().processed().is_none());
}

#[tokio::test]
async fn test_cancelled_process_does_not_block_the_next_one() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_slow_ok(GenerateResponse::from_url("https://x/late.png"), Duration::from_secs(5))
        .push_ok(GenerateResponse::from_url("https://x/second.png"));
    let mut session = EditSession::new(stub.clone());

    session.upload(tiny_png_data_url());
    session.set_prompt("add a sunset");
    let cancelled = timeout(Duration::from_millis(50), session.process()).await;
    assert!(cancelled.is_err());
    assert!(session.images().processed().is_none());
    assert_eq!(session.view_mode(), ViewMode::Original);

    let processed = session.process().await.unwrap();
    assert_eq!(processed, "https://x/second.png");
    assert_eq!(session.view_mode(), ViewMode::Compare);
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn test_view_batch_runs_every_angle_in_order() {
    let stub = Arc::new(StubGenerator::new());
    for i in 0..VIEW_ANGLES.len() {
        stub.push_ok(GenerateResponse::from_url(format!("https://x/{i}.png")));
    }
    let mut batch = ViewBatch::new(stub.clone(), "  a carved wooden chair ");
    batch.set_reference_image(Some(tiny_png_data_url()));

    assert_eq!(batch.run_all().await.unwrap(), 6);
    assert_eq!(batch.success_count(), 6);

    let requests = stub.requests();
    assert_eq!(requests.len(), 6);
    for (request, angle) in requests.iter().zip(VIEW_ANGLES) {
        assert!(request.prompt.starts_with("a carved wooden chair\n\n"));
        assert!(request.prompt.contains(angle.prompt_hint));
        assert!(request.prompt.contains(angle.title));
        assert!(request.reference_image.is_some());
    }
    assert_eq!(
        batch.status("top"),
        Some(&AngleStatus::Success {
            url: "https://x/4.png".to_string()
        })
    );
}

#[tokio::test]
async fn test_view_batch_continues_past_failures_and_retries() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_ok(GenerateResponse::from_url("https://x/front.png"))
        .push_err(GatewayError::invalid_upstream_response("empty"));
    for _ in 0..4 {
        stub.push_ok(GenerateResponse::from_base64("BBBB"));
    }
    stub.push_ok(GenerateResponse::from_url("https://x/back-retry.png"));

    let mut batch = ViewBatch::new(stub.clone(), "lamp");
    assert_eq!(batch.run_all().await.unwrap(), 5);
    assert!(matches!(batch.status("back"), Some(AngleStatus::Error { .. })));

    let status = batch.retry("back").await.unwrap().clone();
    assert_eq!(
        status,
        AngleStatus::Success {
            url: "https://x/back-retry.png".to_string()
        }
    );
    assert_eq!(batch.success_count(), 6);
    assert_eq!(stub.requests().len(), 7);

    assert_eq!(
        batch.retry("diagonal").await.unwrap_err(),
        ViewBatchError::UnknownAngle("diagonal".to_string())
    );

    batch.reset();
    assert_eq!(batch.success_count(), 0);
    assert_eq!(batch.status("front"), Some(&AngleStatus::Idle));
}

#[tokio::test]
async fn test_cancelled_retry_leaves_angle_idle() {
    let stub = Arc::new(StubGenerator::new());
    stub.push_slow_ok(GenerateResponse::from_url("https://x/late.png"), Duration::from_secs(5))
        .push_ok(GenerateResponse::from_url("https://x/left.png"));
    let mut batch = ViewBatch::new(stub.clone(), "teapot");

    let cancelled = timeout(Duration::from_millis(50), batch.retry("left")).await;
    assert!(cancelled.is_err());
    assert_eq!(batch.status("left"), Some(&AngleStatus::Idle));

    let status = batch.retry("left").await.unwrap().clone();
    assert_eq!(
        status,
        AngleStatus::Success {
            url: "https://x/left.png".to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_response_reports_same_message_everywhere() {
    let empty = GenerateResponse {
        url: None,
        base64: None,
    };
    let stub = Arc::new(StubGenerator::new());
    stub.push_ok(empty.clone()).push_ok(empty);

    let mut session = EditSession::new(stub.clone());
    session.upload(tiny_png_data_url());
    session.set_prompt("brighten");
    assert!(matches!(session.process().await, Err(SessionError::NoImageData)));
    assert_eq!(session.error(), Some(NO_IMAGE_DATA));

    let mut batch = ViewBatch::new(stub, "vase");
    assert_eq!(
        batch.retry("front").await.unwrap(),
        &AngleStatus::Error {
            message: NO_IMAGE_DATA.to_string()
        }
    );
}

#[tokio::test]
async fn test_view_batch_rejects_empty_description() {
    let stub = Arc::new(StubGenerator::new());
    let mut batch = ViewBatch::new(stub.clone(), "   ");
    assert_eq!(batch.run_all().await.unwrap_err(), ViewBatchError::EmptyDescription);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_view_batch_through_real_proxy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_string_contains("resolution at least 1024px"))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/v.png")))
        .expect(6)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let mut batch = ViewBatch::new(proxy, "a red kettle");
    assert_eq!(batch.run_all().await.unwrap(), 6);
}
