//! Cluster gateway transport.
//!
//! Rewrites outgoing HTTP requests that carry a cluster hint so they are
//! delivered through the cluster gateway proxy API:
//!
//! ```text
//! GET http://hub:8001/api/v1/pods        (ClusterContext = "cluster-a")
//!   → GET http://hub:8001/apis/cluster.core.oam.dev/v1alpha1/clustergateways/cluster-a/proxy/api/v1/pods
//! ```
//!
//! The router is a [`tower::Service`] wrapping any delegate transport.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod transport;

pub use config::GatewayClientConfig;
pub use routing::{with_cluster_context, ClusterContext, ClusterContextExt, ClusterFilter};
pub use transport::{ClusterGatewayLayer, ClusterGatewayTransport, RouterOption, RoutingError};
