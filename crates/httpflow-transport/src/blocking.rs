//! Blocking HTTP transport implementation
//!
//! Implements the Transport trait over reqwest's blocking client. A fresh
//! client is built for every exchange so the per-request connect timeout
//! and redirect policy take effect without any shared state; nothing is
//! pooled or cached across calls.

use std::collections::HashMap;
use std::io;

use http::Method;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::error::{Result, TransportError};
use crate::traits::{Transport, TransportRequest, TransportResponse};

/// Blocking transport backed by reqwest
///
/// Stateless: every [`Transport::execute`] call constructs a one-shot
/// client configured from the request itself, issues the exchange on the
/// calling thread, and buffers the full response body.
///
/// # Usage
///
/// ```ignore
/// use httpflow_transport::{BlockingTransport, Transport, TransportRequest};
///
/// let transport = BlockingTransport::new();
/// let response = transport.execute(request)?;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingTransport;

impl BlockingTransport {
    /// Create a new blocking transport
    pub fn new() -> Self {
        Self
    }
}

impl Transport for BlockingTransport {
    fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        let redirect = if request.follow_redirects {
            Policy::limited(10)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .connect_timeout(request.connect_timeout)
            .redirect(redirect)
            .build()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let mut req = client
            .request(method, request.url.as_str())
            .timeout(request.timeout);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().map_err(classify)?;

        let status = response.status().as_u16();

        // Collect headers, preserving duplicates in wire order
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers
                    .entry(key.as_str().to_string())
                    .or_default()
                    .push(v.to_string());
            }
        }

        let body = response.text().map_err(classify)?;

        Ok(TransportResponse::new(status, headers, body))
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if interrupted(&err) {
        TransportError::Interrupted(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Http(err.to_string())
    }
}

/// Walk the source chain looking for an interrupted I/O call.
fn interrupted(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if let Some(io_err) = current.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::Interrupted {
                return true;
            }
        }
        source = current.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_interrupted_found_through_source_chain() {
        let inner = io::Error::new(io::ErrorKind::Interrupted, "signal");
        let err = Wrapper(inner);
        assert!(interrupted(&err));
    }

    #[test]
    fn test_other_io_kinds_are_not_interruptions() {
        let inner = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let err = Wrapper(inner);
        assert!(!interrupted(&err));
    }

    #[test]
    fn test_invalid_method_is_rejected_before_any_network_activity() {
        let request = TransportRequest {
            method: "NOT A TOKEN".to_string(),
            url: "http://localhost/never-reached".to_string(),
            headers: HashMap::new(),
            body: None,
            timeout: std::time::Duration::from_secs(1),
            connect_timeout: std::time::Duration::from_secs(1),
            follow_redirects: true,
        };

        match BlockingTransport::new().execute(request) {
            Err(TransportError::InvalidMethod(method)) => assert_eq!(method, "NOT A TOKEN"),
            other => panic!("Expected InvalidMethod, got {other:?}"),
        }
    }
}
