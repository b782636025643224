//! Tests for the configuration surface and dispatch contract, using
//! transport test doubles instead of a live server.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use httpflow::transport::{Transport, TransportError, TransportRequest, TransportResponse};
use httpflow::{Error, RequestBuilder};

/// Panics if the dispatcher ever reaches the transport.
struct RejectingTransport;

impl Transport for RejectingTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        panic!("transport must not be invoked, got {} {}", request.method, request.url);
    }
}

/// Records the assembled request and answers with an empty 200.
#[derive(Default)]
struct RecordingTransport {
    seen: Mutex<Option<TransportRequest>>,
}

impl RecordingTransport {
    fn request(&self) -> TransportRequest {
        self.seen
            .lock()
            .unwrap()
            .clone()
            .expect("transport was never invoked")
    }
}

impl Transport for RecordingTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        *self.seen.lock().unwrap() = Some(request);
        Ok(TransportResponse::new(200, HashMap::new(), ""))
    }
}

/// Always fails with the configured error.
struct FailingTransport(fn() -> TransportError);

impl Transport for FailingTransport {
    fn execute(
        &self,
        _request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        Err((self.0)())
    }
}

#[test]
fn test_send_without_url_is_a_configuration_error() {
    let err = RequestBuilder::new()
        .send_with(&RejectingTransport)
        .unwrap_err();

    match err {
        Error::Configuration(message) => assert!(message.contains("URL")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults_reach_the_transport() {
    let transport = RecordingTransport::default();
    RequestBuilder::new()
        .url("https://example.test/items/1")
        .send_with(&transport)
        .expect("Request failed");

    let request = transport.request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "https://example.test/items/1");
    assert!(request.headers.is_empty());
    assert!(request.body.is_none());
    assert_eq!(request.timeout, Duration::from_secs(10));
    assert_eq!(request.connect_timeout, Duration::from_secs(10));
    assert!(request.follow_redirects);
}

#[test]
fn test_configured_overrides_reach_the_transport() {
    let transport = RecordingTransport::default();
    RequestBuilder::new()
        .url("https://example.test/items")
        .delete()
        .header("Authorization", "Bearer token")
        .connect_timeout_secs(3)
        .request_timeout_secs(45)
        .follow_redirects(false)
        .send_with(&transport)
        .expect("Request failed");

    let request = transport.request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.headers.get("Authorization").unwrap(), "Bearer token");
    assert_eq!(request.connect_timeout, Duration::from_secs(3));
    assert_eq!(request.timeout, Duration::from_secs(45));
    assert!(!request.follow_redirects);
}

#[test]
fn test_form_fields_force_post_over_configured_method_and_body() {
    let transport = RecordingTransport::default();
    RequestBuilder::new()
        .url("https://example.test/login")
        .put()
        .body("this body is discarded")
        .form("username", "johndoe")
        .send_with(&transport)
        .expect("Request failed");

    let request = transport.request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.body.as_deref(), Some("username=johndoe"));
}

#[test]
fn test_method_set_after_form_fields_is_still_overridden() {
    let transport = RecordingTransport::default();
    RequestBuilder::new()
        .url("https://example.test/login")
        .form("username", "johndoe")
        .delete()
        .send_with(&transport)
        .expect("Request failed");

    assert_eq!(transport.request().method, "POST");
}

#[test]
fn test_interrupted_transport_surfaces_as_interruption() {
    let transport =
        FailingTransport(|| TransportError::Interrupted("signal received".to_string()));

    let err = RequestBuilder::new()
        .url("https://example.test/items")
        .send_with(&transport)
        .unwrap_err();

    match err {
        Error::Interrupted(message) => assert_eq!(message, "signal received"),
        other => panic!("Expected Interrupted error, got {other:?}"),
    }
}

#[test]
fn test_transport_failure_carries_cause() {
    let transport =
        FailingTransport(|| TransportError::Connect("connection refused".to_string()));

    let err = RequestBuilder::new()
        .url("https://example.test/items")
        .send_with(&transport)
        .unwrap_err();

    match err {
        Error::Transport { message, source } => {
            assert!(message.contains("connection refused"));
            assert!(matches!(source, TransportError::Connect(_)));
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}
