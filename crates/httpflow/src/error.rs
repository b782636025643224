//! Error types for httpflow
//!
//! Four failure kinds, raised synchronously to whichever call triggered
//! them: missing configuration, a failed exchange, an interrupted blocked
//! call, and a response body that does not look like JSON. Nothing is
//! retried or suppressed internally.

use httpflow_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration was missing at dispatch time.
    ///
    /// Raised before any transport resource is created; no network
    /// activity has happened when this is returned.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The underlying exchange failed.
    #[error("failed to send request: {message}")]
    Transport {
        /// Message from the original failure
        message: String,

        /// The transport failure itself
        #[source]
        source: TransportError,
    },

    /// The blocked call was interrupted before completing.
    ///
    /// Distinct from [`Error::Transport`] so callers can tell "someone
    /// told me to stop" apart from "the network failed".
    #[error("request interrupted: {0}")]
    Interrupted(String),

    /// The response body does not syntactically look like JSON.
    ///
    /// Raised only by [`crate::Response::as_json`], never during dispatch.
    #[error("response body is not valid JSON: {0}")]
    Format(String),
}

impl Error {
    /// Translate a transport failure, splitting interruption from I/O failure.
    pub(crate) fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Interrupted(message) => Error::Interrupted(message),
            other => Error::Transport {
                message: other.to_string(),
                source: other,
            },
        }
    }
}
