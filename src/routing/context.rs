//! Cluster routing hint carried on a request.
//!
//! The hint lives in the request's extensions, so it travels with the
//! request through every layer and survives `into_parts`/`from_parts`.
//! A request with no `ClusterContext` extension has no hint; a request
//! carrying `ClusterContext("")` has a hint whose value is empty.

use http::Request;

/// Name of the cluster a request is logically addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterContext(String);

impl ClusterContext {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self(cluster.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClusterContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attach a cluster name to the request, replacing any previous one.
pub fn with_cluster_context<B>(mut request: Request<B>, cluster: impl Into<String>) -> Request<B> {
    request.extensions_mut().insert(ClusterContext::new(cluster));
    request
}

/// Read the cluster name attached to the request, if any.
pub fn cluster_context<B>(request: &Request<B>) -> Option<&str> {
    request.extensions().get::<ClusterContext>().map(ClusterContext::as_str)
}

/// Extension trait for reading and attaching the cluster hint.
pub trait ClusterContextExt {
    /// The attached cluster name, if any.
    fn cluster(&self) -> Option<&str>;

    /// Attach a cluster name, replacing any previous one.
    fn set_cluster(&mut self, cluster: impl Into<String>);
}

impl<B> ClusterContextExt for Request<B> {
    fn cluster(&self) -> Option<&str> {
        cluster_context(self)
    }

    fn set_cluster(&mut self, cluster: impl Into<String>) {
        self.extensions_mut().insert(ClusterContext::new(cluster));
    }
}
