//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayClientConfig (validated, immutable)
//!     → router_options() → ClusterGatewayTransport settings
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::GatewayClientConfig;
pub use schema::GatewayConfig;
pub use schema::RoutingConfig;
pub use schema::{META_API_GROUP_NAME, META_API_VERSION_NAME};
