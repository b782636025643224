//! The send algorithm: validate, assemble, execute, wrap
//!
//! A frozen [`RequestConfig`] goes in, a [`Response`] or error comes out.
//! No retries, no backoff, no partial-response recovery: any failure
//! aborts the single exchange.

use std::collections::HashMap;

use httpflow_transport::{Transport, TransportRequest};

use crate::config::RequestConfig;
use crate::error::{Error, Result};
use crate::response::Response;

/// Run one exchange from a frozen configuration snapshot.
pub(crate) fn dispatch(config: RequestConfig, transport: &dyn Transport) -> Result<Response> {
    if config.url.is_empty() {
        return Err(Error::Configuration(
            "URL must be set before sending a request".to_string(),
        ));
    }

    let request = assemble(config);

    tracing::debug!("Sending {} request to {}", request.method, request.url);

    let raw = transport.execute(request).map_err(Error::from_transport)?;

    tracing::debug!("Received response with status: {}", raw.status);

    Ok(Response::new(raw))
}

/// Build the transport-level request from the configuration.
///
/// Body selection runs in strict priority order: a non-empty form-field
/// map wins over a raw body and forces the method to POST; otherwise the
/// configured method and optional body are used as-is.
fn assemble(config: RequestConfig) -> TransportRequest {
    let (method, body) = if !config.form_fields.is_empty() {
        ("POST".to_string(), Some(encode_form(&config.form_fields)))
    } else if let Some(body) = config.body {
        (config.method, Some(body))
    } else {
        (config.method, None)
    };

    TransportRequest {
        method,
        url: config.url,
        headers: config.headers,
        body,
        timeout: config.request_timeout,
        connect_timeout: config.connect_timeout,
        follow_redirects: config.follow_redirects,
    }
}

/// Join form fields into an `application/x-www-form-urlencoded` body.
///
/// Values are percent-encoded; field names are passed through untouched.
/// The asymmetry is part of the documented contract; do not encode names.
/// Pair order follows the map's iteration order, which is unspecified.
fn encode_form(fields: &HashMap<String, String>) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
