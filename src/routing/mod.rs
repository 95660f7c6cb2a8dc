//! Cluster routing subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing Request (extensions, uri)
//!     → context.rs (read ClusterContext hint)
//!     → filter.rs (is this cluster proxied?)
//!     → path.rs (build /apis/.../clustergateways/<cluster>/proxy/<path>)
//! ```
//!
//! # Design Decisions
//! - Pure functions only; the transport applies the result
//! - Deterministic: same input always produces the same path

pub mod context;
pub mod filter;
pub mod path;

pub use context::{cluster_context, with_cluster_context, ClusterContext, ClusterContextExt};
pub use filter::{ClusterFilter, SkipClusters};
pub use path::format_proxy_path;
