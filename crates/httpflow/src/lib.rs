//! # httpflow
//!
//! Fluent request building and response wrapping over a blocking HTTP
//! transport. A request is assembled through chained configuration calls,
//! dispatched synchronously, and answered with a normalized [`Response`]
//! exposing status, body, and headers.
//!
//! The crate deliberately stays small: no connection pooling, no retries,
//! no streaming bodies, no cookie or session handling. The transport
//! itself lives behind the [`Transport`] seam in `httpflow-transport`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use httpflow::RequestBuilder;
//!
//! fn main() -> httpflow::Result<()> {
//!     let response = RequestBuilder::new()
//!         .url("https://jsonplaceholder.typicode.com/posts/1")
//!         .send()?;
//!
//!     println!("status: {}", response.status());
//!     println!("{}", response.body());
//!     Ok(())
//! }
//! ```
//!
//! A POST with a JSON body:
//!
//! ```rust,no_run
//! use httpflow::RequestBuilder;
//!
//! # fn main() -> httpflow::Result<()> {
//! let response = RequestBuilder::new()
//!     .url("https://jsonplaceholder.typicode.com/posts")
//!     .post()
//!     .json()
//!     .body(r#"{"title":"foo","body":"bar","userId":1}"#)
//!     .send()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use builder::RequestBuilder;
pub use config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, RequestConfig};
pub use error::{Error, Result};
pub use httpflow_transport::Transport;
pub use response::Response;

// Module declarations
pub mod builder;
pub mod config;
mod dispatch;
pub mod error;
pub mod response;

// Transport seam, re-exported for callers supplying their own transport
pub use httpflow_transport as transport;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use httpflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Error, RequestBuilder, Response, Result, Transport};
}
