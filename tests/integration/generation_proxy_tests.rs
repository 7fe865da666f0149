//! Generation proxy against a mocked upstream

use crate::common::*;
use nano_banana::core::generation::{GenerateRequest, GenerationProxy, ImageGenerator};
use nano_banana::GatewayError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn multipart_contains(req: &Request, needle: &[u8]) -> bool {
    req.body.windows(needle.len()).any(|w| w == needle)
}

#[tokio::test]
async fn test_prompt_only_calls_generations_with_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({
            "model": TEST_MODEL,
            "prompt": "make it black and white",
            "response_format": "url",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/y.png")))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let response = proxy
        .handle_body(br#"{"prompt":"make it black and white"}"#)
        .await
        .unwrap();

    assert_eq!(response.url.as_deref(), Some("https://x/y.png"));
    assert!(response.base64.is_none());
}

#[tokio::test]
async fn test_reference_image_calls_edits_with_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/edits"))
        .and(header("authorization", "Bearer test-key"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="model""#))
        .and(body_string_contains(TEST_MODEL))
        .and(body_string_contains(r#"name="prompt""#))
        .and(body_string_contains("remove background"))
        .and(body_string_contains(r#"name="image"; filename="reference.jpeg""#))
        .and(body_string_contains("image/jpeg"))
        .and(|req: &Request| multipart_contains(req, b"\r\n\r\n\x00\x00\x00\r\n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(b64_response("BBBB")))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let response = proxy
        .generate(
            GenerateRequest::new("remove background")
                .with_reference_image("data:image/jpeg;base64,AAAA"),
        )
        .await
        .unwrap();

    assert!(response.url.is_none());
    assert_eq!(response.base64.as_deref(), Some("BBBB"));
}

#[tokio::test]
async fn test_extension_strips_mime_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/edits"))
        .and(body_string_contains(r#"filename="reference.svg""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/z.png")))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let response = proxy
        .generate(
            GenerateRequest::new("vectorize").with_reference_image("data:image/svg+xml;base64,AAAA"),
        )
        .await
        .unwrap();
    assert_eq!(response.url.as_deref(), Some("https://x/z.png"));
}

#[tokio::test]
async fn test_upstream_error_status_and_body_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited, slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let err = proxy
        .generate(GenerateRequest::new("a banana"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Upstream { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited, slow down");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_attempt_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let err = proxy.generate(GenerateRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn test_unusable_success_is_invalid_upstream_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_image_response()))
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let err = proxy.generate(GenerateRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidUpstreamResponse(_)));
}

#[tokio::test]
async fn test_both_channels_returned_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "url": "https://x/y.png", "b64_json": "BBBB" }]
        })))
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let response = proxy.generate(GenerateRequest::new("x")).await.unwrap();
    assert_eq!(response.url.as_deref(), Some("https://x/y.png"));
    assert_eq!(response.base64.as_deref(), Some("BBBB"));
}

#[tokio::test]
async fn test_non_json_success_is_unexpected_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();
    let err = proxy.generate(GenerateRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Serialization(_)));
}

#[tokio::test]
async fn test_missing_credential_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/y.png")))
        .expect(0)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config_without_key(&server)).unwrap();
    let err = proxy
        .handle_body(br#"{"prompt":"a banana"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::MissingCredential(_)));
}

#[tokio::test]
async fn test_invalid_input_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/y.png")))
        .expect(0)
        .mount(&server)
        .await;

    let proxy = GenerationProxy::new(upstream_config(&server)).unwrap();

    for body in [
        &br#"{"prompt":"   "}"#[..],
        br#"{"referenceImage":"data:image/png;base64,AAAA"}"#,
        b"prompt=hello",
    ] {
        let err = proxy.handle_body(body).await.unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest(_)), "{err:?}");
    }

    let err = proxy
        .handle_body(br#"{"prompt":"x","referenceImage":"data:image/png,not-base64"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidReferenceImage(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(url_response("https://x/y.png"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = upstream_config(&server);
    config.timeout = 1;
    let proxy = GenerationProxy::new(config).unwrap();

    let err = proxy.generate(GenerateRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(url_response("https://x/y.png")))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = upstream_config(&server);
    config.api_base.push('/');
    let proxy = GenerationProxy::new(config).unwrap();
    assert!(proxy.generate(GenerateRequest::new("x")).await.is_ok());
}
