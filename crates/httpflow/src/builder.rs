//! Fluent request builder

use std::time::Duration;

use httpflow_transport::{BlockingTransport, Transport};

use crate::config::RequestConfig;
use crate::dispatch;
use crate::error::Result;
use crate::response::Response;

/// Builder for one HTTP request.
///
/// Configuration calls chain by value and only update internal state;
/// nothing touches the network until [`send`](Self::send). A builder
/// describes a single exchange: build one per request, and use separate
/// builders from separate threads. There is no configuration-time
/// validation; invalid combinations surface at dispatch.
///
/// # Examples
///
/// ```rust,no_run
/// use httpflow::RequestBuilder;
///
/// # fn main() -> httpflow::Result<()> {
/// let response = RequestBuilder::new()
///     .url("https://example.test/items")
///     .post()
///     .json()
///     .body(r#"{"title":"foo"}"#)
///     .send()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    config: RequestConfig,
}

impl RequestBuilder {
    /// Create a builder with default settings: GET, 10 second timeouts,
    /// redirects followed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target URL.
    ///
    /// The URL is used verbatim at dispatch; no validation or
    /// normalization happens here.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set a header. Setting the same name twice keeps the last value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Shorthand for `Content-Type: application/json`.
    pub fn json(self) -> Self {
        self.header("Content-Type", "application/json")
    }

    /// Set the raw request body.
    ///
    /// Ignored if any form field is present at dispatch; see
    /// [`form`](Self::form).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.config.body = Some(body.into());
        self
    }

    /// Set the HTTP method; stored upper-cased. Any token is accepted.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.config.method = method.into().to_uppercase();
        self
    }

    /// Shorthand for `Content-Type: application/x-www-form-urlencoded`.
    pub fn form_urlencoded(self) -> Self {
        self.header("Content-Type", "application/x-www-form-urlencoded")
    }

    /// Add a form field. Adding the same name twice keeps the last value.
    ///
    /// Once any field is present, dispatch synthesizes a form-encoded
    /// body from the field map and forces the method to POST; any
    /// configured method or raw body is silently discarded. Combining
    /// `form` with [`body`](Self::body) or
    /// [`put`](Self::put)/[`delete`](Self::delete) therefore has no
    /// effect on what is sent.
    pub fn form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.form_fields.insert(name.into(), value.into());
        self
    }

    /// Override the connection-establishment timeout, in seconds.
    pub fn connect_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.connect_timeout = Duration::from_secs(seconds);
        self
    }

    /// Override the whole-exchange timeout, in seconds.
    pub fn request_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.request_timeout = Duration::from_secs(seconds);
        self
    }

    /// Choose whether the transport follows 3xx redirects. Defaults to
    /// following; when disabled the 3xx response is returned as-is.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    /// Shorthand for `method("POST")`.
    pub fn post(self) -> Self {
        self.method("POST")
    }

    /// Shorthand for `method("PUT")`.
    pub fn put(self) -> Self {
        self.method("PUT")
    }

    /// Shorthand for `method("DELETE")`.
    pub fn delete(self) -> Self {
        self.method("DELETE")
    }

    /// Send the request, blocking until a response arrives or the
    /// exchange fails.
    ///
    /// A fresh [`BlockingTransport`] is constructed for this call and
    /// owned by it exclusively; nothing is cached across dispatches. The
    /// underlying client is only built after validation passes, so a
    /// missing URL never allocates a network resource.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`](crate::Error::Configuration) when no URL
    /// was set, [`Error::Transport`](crate::Error::Transport) when the
    /// exchange fails, and
    /// [`Error::Interrupted`](crate::Error::Interrupted) when the blocked
    /// call is interrupted.
    pub fn send(self) -> Result<Response> {
        dispatch::dispatch(self.config, &BlockingTransport::new())
    }

    /// Send the request through a caller-supplied transport.
    ///
    /// Runs the same validate/assemble/wrap pipeline as
    /// [`send`](Self::send), with the transport-construction step
    /// replaced by `transport`. Useful for tests and for callers that
    /// bring their own transport implementation.
    pub fn send_with(self, transport: &dyn Transport) -> Result<Response> {
        dispatch::dispatch(self.config, transport)
    }
}
