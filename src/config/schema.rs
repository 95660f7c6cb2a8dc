//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the gateway client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::filter::SkipClusters;
use crate::transport::{InvalidHost, RouterOption};

/// API group served by the cluster gateway.
pub const META_API_GROUP_NAME: &str = "cluster.core.oam.dev";

/// API version served by the cluster gateway.
pub const META_API_VERSION_NAME: &str = "v1alpha1";

/// Root configuration for the gateway client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayClientConfig {
    /// Where requests are sent and how the target host is rewritten.
    pub gateway: GatewayConfig,

    /// Cluster routing policy.
    pub routing: RoutingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayClientConfig {
    /// Convert the file settings into the ordered router option list.
    pub fn router_options(&self) -> Result<Vec<RouterOption>, InvalidHost> {
        let mut options = Vec::new();
        if let Some(host) = &self.gateway.host_override {
            options.push(RouterOption::host(host)?);
        }
        if let Some(filter) = self.routing.filter() {
            options.push(RouterOption::filter(filter));
        }
        Ok(options)
    }
}

/// Gateway endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the API server fronting the cluster gateway
    /// (e.g., "http://127.0.0.1:8001").
    pub endpoint: String,

    /// Host to send proxied requests to instead of the endpoint host.
    pub host_override: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8001".to_string(),
            host_override: None,
        }
    }
}

/// Cluster routing policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Forward requests without a cluster unchanged instead of failing them.
    pub fallback: bool,

    /// Clusters that are reached directly, never through the gateway.
    pub skip_clusters: Vec<String>,

    /// Treat an empty cluster name as "not proxied".
    pub skip_empty_cluster: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fallback: true,
            skip_clusters: Vec::new(),
            skip_empty_cluster: true,
        }
    }
}

impl RoutingConfig {
    /// Build the cluster filter, or `None` when every cluster is proxied.
    pub fn filter(&self) -> Option<SkipClusters> {
        if self.skip_clusters.is_empty() && !self.skip_empty_cluster {
            return None;
        }
        let filter = SkipClusters::new(self.skip_clusters.iter().cloned());
        Some(filter.skip_empty(self.skip_empty_cluster))
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
