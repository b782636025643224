//! Request configuration accumulated by the builder

use std::collections::HashMap;
use std::time::Duration;

/// Default timeout for connection establishment.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for the whole exchange.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a single HTTP exchange.
///
/// Accumulated by [`crate::RequestBuilder`] and frozen at dispatch. One
/// instance describes exactly one request; it is consumed by `send` and
/// not reused across dispatches.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Target URL, used verbatim; must be non-empty at dispatch time
    pub url: String,

    /// HTTP method, stored upper-cased; ignored when `form_fields` is non-empty
    pub method: String,

    /// Request headers; setting a name twice overwrites, it never appends
    pub headers: HashMap<String, String>,

    /// Raw body payload; ignored when `form_fields` is non-empty
    pub body: Option<String>,

    /// Form fields; when non-empty they synthesize the body and force POST
    pub form_fields: HashMap<String, String>,

    /// Timeout for connection establishment
    pub connect_timeout: Duration,

    /// Timeout for the whole exchange
    pub request_timeout: Duration,

    /// Whether the transport follows 3xx redirects
    pub follow_redirects: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            headers: HashMap::new(),
            body: None,
            form_fields: HashMap::new(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            follow_redirects: true,
        }
    }
}
