//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the gateway endpoint is an absolute http URL
//! - Check the host override is a valid URI authority
//! - Check value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayClientConfig;
use crate::transport::HostOverride;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("gateway.endpoint {endpoint:?} is not a valid URL: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("gateway.endpoint {0:?} must use plain http; terminate TLS outside this client")]
    UnsupportedScheme(String),

    #[error("gateway.host_override {0:?} is not a valid host[:port]")]
    InvalidHostOverride(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.gateway.endpoint) {
        Ok(url) if url.scheme() != "http" => {
            errors.push(ValidationError::UnsupportedScheme(config.gateway.endpoint.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.gateway.endpoint.clone(),
            reason: e.to_string(),
        }),
    }

    if let Some(host) = &config.gateway.host_override {
        if host.parse::<HostOverride>().is_err() {
            errors.push(ValidationError::InvalidHostOverride(host.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = GatewayClientConfig::default();
        config.gateway.endpoint = "ftp://gateway".into();
        config.gateway.host_override = Some("bad host".into());
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnsupportedScheme("ftp://gateway".into()),
                ValidationError::InvalidHostOverride("bad host".into()),
                ValidationError::ZeroTimeout,
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let mut config = GatewayClientConfig::default();
        config.gateway.endpoint = "/api".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_accepts_host_with_port() {
        let mut config = GatewayClientConfig::default();
        config.gateway.host_override = Some("gateway.example:9443".into());
        assert!(validate_config(&config).is_ok());
    }
}
