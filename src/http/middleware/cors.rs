//! Cross-origin policy middleware.
//!
//! # Responsibilities
//! - Translate `CorsConfig` into a `tower_http` CORS layer
//! - Answer preflight `OPTIONS` requests before route dispatch
//!
//! # Design Decisions
//! - Origin patterns are matched by predicate: browsers reject the literal
//!   `*` origin together with credentials, so scheme wildcards like
//!   `https://*` echo the caller's origin back instead
//! - Config strings are parsed here once, at construction; a value that
//!   slipped past `config::validation` is a programmer error and panics at
//!   startup rather than surfacing per-request

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer for the given policy.
///
/// # Panics
///
/// Panics if a method or header name in the config does not parse. Configs
/// that went through `config::validation` cannot trigger this.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .map(|m| m.parse().expect("invalid CORS method in validated config"))
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .map(|h| h.parse().expect("invalid CORS header in validated config"))
        .collect();

    let patterns = config.allowed_origins.clone();
    let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin
            .to_str()
            .map(|o| origin_allowed(&patterns, o))
            .unwrap_or(false)
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_secs))
}

/// Match an `Origin` header value against the configured patterns.
///
/// A pattern ending in `*` matches any origin with that prefix
/// (`https://*` matches every https origin); anything else is an
/// exact, case-sensitive match.
fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| {
        match pattern.strip_suffix('*') {
            Some(prefix) => origin.starts_with(prefix),
            None => origin == pattern,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme_wildcards() -> Vec<String> {
        vec!["https://*".into(), "http://*".into()]
    }

    #[test]
    fn scheme_wildcard_admits_any_http_origin() {
        let patterns = scheme_wildcards();
        assert!(origin_allowed(&patterns, "https://chess.example.com"));
        assert!(origin_allowed(&patterns, "http://localhost:5173"));
    }

    #[test]
    fn scheme_wildcard_rejects_other_schemes() {
        let patterns = scheme_wildcards();
        assert!(!origin_allowed(&patterns, "ftp://files.example.com"));
        assert!(!origin_allowed(&patterns, "chrome-extension://abcdef"));
    }

    #[test]
    fn exact_pattern_matches_exactly() {
        let patterns = vec!["https://chess.example.com".to_string()];
        assert!(origin_allowed(&patterns, "https://chess.example.com"));
        assert!(!origin_allowed(&patterns, "https://evil.example.com"));
        assert!(!origin_allowed(&patterns, "https://chess.example.com.evil.io"));
    }

    #[test]
    fn subdomain_wildcard_matches_prefix() {
        let patterns = vec!["https://api.*".to_string()];
        assert!(origin_allowed(&patterns, "https://api.chess.example.com"));
        assert!(!origin_allowed(&patterns, "https://www.chess.example.com"));
    }

    #[test]
    fn default_policy_builds_without_panicking() {
        cors_layer(&CorsConfig::default());
    }
}
