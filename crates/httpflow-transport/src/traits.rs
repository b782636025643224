//! Transport trait and request/response value types
//!
//! Defines the synchronous boundary between request assembly and the
//! transport mechanism. Both value types are plain data: the caller fills
//! in a [`TransportRequest`], the transport answers with a
//! [`TransportResponse`].

use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;

/// One fully assembled HTTP exchange
///
/// Carries everything a [`Transport`] needs to execute the request,
/// including the per-exchange client settings (timeouts, redirect
/// behavior). The URL is used verbatim; no normalization happens at this
/// layer.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// Request URL
    pub url: String,

    /// Request headers
    pub headers: HashMap<String, String>,

    /// Request body (optional)
    pub body: Option<String>,

    /// Timeout applied to the whole exchange
    pub timeout: Duration,

    /// Timeout applied to connection establishment
    pub connect_timeout: Duration,

    /// Whether 3xx responses are re-issued to their `Location` target
    pub follow_redirects: bool,
}

/// HTTP response
///
/// Represents an HTTP response received from the server, with the body
/// fully buffered and multi-value headers preserved.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers; values for a repeated name keep their wire order
    pub headers: HashMap<String, Vec<String>>,

    /// Response body
    pub body: String,
}

impl TransportResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// Synchronous transport over one HTTP exchange
pub trait Transport: Send + Sync {
    /// Execute the exchange, blocking until a response arrives, the
    /// timeout elapses, or the attempt fails.
    fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}
