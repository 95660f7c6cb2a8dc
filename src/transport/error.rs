//! Router error types.

use thiserror::Error;

/// Errors returned by [`ClusterGatewayTransport`](super::ClusterGatewayTransport).
///
/// `E` is the delegate's error type. Delegate failures are carried
/// unchanged in [`RoutingError::Transport`].
#[derive(Debug, Error)]
pub enum RoutingError<E> {
    /// No cluster hint on the request and fallback is disabled.
    #[error("missing cluster name in the request context")]
    MissingClusterContext,

    /// Error returned by the delegate transport.
    #[error(transparent)]
    Transport(E),
}

/// Result type for router preparation.
pub type RoutingResult<T, E> = Result<T, RoutingError<E>>;

/// A host override that is not a valid `host[:port]`.
#[derive(Debug, Error)]
#[error("invalid host override {host:?}, expected host[:port]")]
pub struct InvalidHost {
    pub host: String,
    #[source]
    pub source: http::Error,
}
