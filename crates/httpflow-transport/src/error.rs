//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors raised while executing an HTTP exchange
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established
    #[error("connection error: {0}")]
    Connect(String),

    /// The exchange did not complete within its timeout
    #[error("request timed out")]
    Timeout,

    /// The blocked call was interrupted before completing
    #[error("request interrupted: {0}")]
    Interrupted(String),

    /// The configured method is not a valid HTTP method token
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Any other request/response failure
    #[error("HTTP error: {0}")]
    Http(String),
}
