//! Cluster filters.
//!
//! # Responsibilities
//! - Decide whether a named cluster is reached through the gateway
//! - Provide the list-based filter used by file configuration
//!
//! # Design Decisions
//! - Any `Fn(&str) -> bool` is a filter
//! - Returning false means "send directly", never "reject"

use std::collections::HashSet;

/// Decides whether requests for a cluster go through the gateway.
pub trait ClusterFilter: Send + Sync {
    /// Returns true if requests for `cluster` should be proxied.
    fn accepts(&self, cluster: &str) -> bool;
}

impl<F> ClusterFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accepts(&self, cluster: &str) -> bool {
        self(cluster)
    }
}

/// Passes through a fixed set of clusters (e.g. the hosting "local"
/// cluster) and optionally the empty cluster name.
#[derive(Debug, Clone, Default)]
pub struct SkipClusters {
    skipped: HashSet<String>,
    skip_empty: bool,
}

impl SkipClusters {
    pub fn new<I, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skipped: clusters.into_iter().map(Into::into).collect(),
            skip_empty: false,
        }
    }

    /// Also pass through requests whose cluster name is empty.
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }
}

impl ClusterFilter for SkipClusters {
    fn accepts(&self, cluster: &str) -> bool {
        if cluster.is_empty() && self.skip_empty {
            return false;
        }
        !self.skipped.contains(cluster)
    }
}
