//! Blocking HTTP transport seam for httpflow
//!
//! Provides the trait-based boundary between request assembly and the code
//! that actually moves bytes. The request builder hands a fully assembled
//! [`TransportRequest`] to a [`Transport`]; the production implementation
//! ([`BlockingTransport`]) executes it over reqwest's blocking client, and
//! tests substitute their own implementations.
//!
//! # Architecture
//!
//! - **Transport trait**: synchronous interface over one HTTP exchange
//! - **Blocking transport**: reqwest-backed implementation, one client per call
//! - **Error handling**: unified error taxonomy for exchange failures

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod blocking;
pub mod error;
pub mod traits;

// Re-export commonly used types
pub use blocking::BlockingTransport;
pub use error::{Result, TransportError};
pub use traits::{Transport, TransportRequest, TransportResponse};
