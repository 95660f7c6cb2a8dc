//! Cluster gateway transport subsystem.
//!
//! # Data Flow
//! ```text
//! Request (+ ClusterContext extension)
//!     → round_tripper.rs (pass through / reject / rewrite)
//!     → delegate Service (hyper_util client, or any tower Service)
//!     → Response or delegate error, unchanged
//!
//! Construction:
//!     fallback + [RouterOption] → options.rs (RouterSettings)
//!     → frozen in Arc, shared by every clone of the router
//! ```
//!
//! # Design Decisions
//! - One delegate call per request at most
//! - Rewriting cannot fail; the only error originating here is a missing
//!   cluster context under the strict policy
//! - Host overrides are parsed when the option is built
//! - No retries, no timeouts, no response inspection

pub mod error;
pub mod layer;
pub mod options;
pub mod round_tripper;

pub use error::{InvalidHost, RoutingError};
pub use layer::ClusterGatewayLayer;
pub use options::{HostOverride, RouterOption, RouterSettings};
pub use round_tripper::{ClusterGatewayTransport, ResponseFuture};
