//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! RequestSpec (path, cluster, headers, body)
//!     → request.rs (resolve against endpoint, attach ClusterContext)
//!     → client.rs (request id → router → trace → hyper client)
//!     → response.rs (buffered FetchedResponse)
//! ```

pub mod client;
pub mod request;
pub mod response;

use std::time::Duration;

use thiserror::Error;

pub use client::{build_service, execute, http_client, GatewayService, HttpClient};
pub use request::{parse_header, RequestSpec};
pub use response::FetchedResponse;

/// Boxed error used at the client boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from building or sending a client request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    #[error(transparent)]
    InvalidHost(#[from] crate::transport::InvalidHost),

    #[error("invalid header {0:?}, expected \"Name: value\"")]
    InvalidHeader(String),

    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}
