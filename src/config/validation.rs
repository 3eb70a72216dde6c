//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that addresses, methods and header names actually parse
//! - Reject degenerate CORS policies before they reach layer construction
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: `&BackendConfig → Result<(), Vec<ValidationError>>`
//! - Runs before the config is accepted into the system, so the CORS layer
//!   builder may treat bad values as programmer errors

use std::net::SocketAddr;

use axum::http::{HeaderName, Method};
use thiserror::Error;

use crate::config::schema::BackendConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("cors.allowed_origins must not be empty")]
    NoAllowedOrigins,

    #[error("cors.allowed_origins entry {0:?} must be scheme-qualified (http:// or https://)")]
    InvalidOrigin(String),

    #[error("cors.allowed_methods must not be empty")]
    NoAllowedMethods,

    #[error("cors.allowed_methods entry {0:?} is not a valid HTTP method")]
    InvalidMethod(String),

    #[error("cors.allowed_headers entry {0:?} is not a valid header name")]
    InvalidHeader(String),

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Check a deserialized config for semantic errors, collecting all of them.
pub fn validate_config(config: &BackendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::NoAllowedOrigins);
    }
    for origin in &config.cors.allowed_origins {
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if config.cors.allowed_methods.is_empty() {
        errors.push(ValidationError::NoAllowedMethods);
    }
    for method in &config.cors.allowed_methods {
        if method.parse::<Method>().is_err() {
            errors.push(ValidationError::InvalidMethod(method.clone()));
        }
    }

    for header in &config.cors.allowed_headers {
        if header.parse::<HeaderName>().is_err() {
            errors.push(ValidationError::InvalidHeader(header.clone()));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
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
    fn default_config_is_valid() {
        assert!(validate_config(&BackendConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let mut config = BackendConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".into())]
        );
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = BackendConfig::default();
        config.cors.allowed_origins = vec!["ftp://files".into()];
        config.cors.allowed_methods = vec!["GE T".into()];
        config.cors.allowed_headers = vec!["bad header".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn empty_cors_lists_are_rejected() {
        let mut config = BackendConfig::default();
        config.cors.allowed_origins.clear();
        config.cors.allowed_methods.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::NoAllowedOrigins));
        assert!(errors.contains(&ValidationError::NoAllowedMethods));
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = BackendConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
