//! Normalized view over a completed HTTP exchange

use std::collections::HashMap;
use std::fmt;

use httpflow_transport::TransportResponse;

use crate::error::{Error, Result};

/// Read-only view of a completed exchange.
///
/// Created once per dispatch from the transport's raw response and owned
/// by the caller; it is never mutated afterwards. The body is fully
/// buffered in memory.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: String,
    headers: HashMap<String, Vec<String>>,
}

impl Response {
    pub(crate) fn new(raw: TransportResponse) -> Self {
        Self {
            status: raw.status,
            body: raw.body,
            headers: raw.headers,
        }
    }

    /// The HTTP status code, as received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The full response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the status code is in the 2xx success range.
    pub fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// All response headers; values for a repeated name keep their order.
    pub fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// First value for `name` (case-insensitive), or `None` when the
    /// header is absent or has no values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// The body, returned unchanged if it syntactically looks like JSON.
    ///
    /// Succeeds when the body, after trimming surrounding whitespace,
    /// starts with `{` or `[`. This is a sniff only; the body is not
    /// parsed or validated structurally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for anything else, including an empty body.
    pub fn as_json(&self) -> Result<&str> {
        let trimmed = self.body.trim();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            Ok(&self.body)
        } else {
            Err(Error::Format(
                "body does not start with '{' or '['".to_string(),
            ))
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Headers: {:?}", self.headers)?;
        write!(f, "Body:\n{}", self.body)
    }
}
