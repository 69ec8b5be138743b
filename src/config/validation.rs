//! Configuration validation.
//!
//! Semantic checks that serde cannot express. All problems are collected and
//! reported together so a bad deployment is fixed in one round trip.

use axum::http::HeaderValue;

use crate::config::schema::ProxyConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("backend service name must not be empty")]
    EmptyServiceName,

    #[error("backend namespace must not be empty")]
    EmptyNamespace,

    #[error("backend service port {0:?} is not a port number")]
    InvalidServicePort(String),

    #[error("upstream host must not be empty")]
    EmptyHost,

    #[error("upstream host {0:?} is not a valid Host header value")]
    InvalidHost(String),

    #[error("not-found page path must not be empty")]
    EmptyNotFoundPage,
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let backend = &config.backend;
    if backend.service_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }
    if backend.namespace.trim().is_empty() {
        errors.push(ValidationError::EmptyNamespace);
    }
    match backend.service_port.parse::<u16>() {
        Ok(port) if port > 0 => {}
        _ => errors.push(ValidationError::InvalidServicePort(
            backend.service_port.clone(),
        )),
    }

    let host = &config.upstream.host;
    if host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if HeaderValue::from_str(host).is_err() {
        errors.push(ValidationError::InvalidHost(host.clone()));
    }

    if config.not_found.page.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyNotFoundPage);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
