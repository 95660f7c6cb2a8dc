//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loading, CLI, router decisions (trace level)
//!     → logging.rs (tracing subscriber, stderr)
//! outgoing requests
//!     → tower_http TraceLayer spans (see client.rs)
//! ```

pub mod logging;

pub use logging::init_logging;
