//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All errors are
//! collected and returned together rather than stopping at the first one.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::upstream::base_url::{derive_base_url, BaseUrlError};

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("ai_engine.health_check_url: {0}")]
    HealthCheckUrl(#[from] BaseUrlError),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if let Err(e) = derive_base_url(&config.ai_engine.health_check_url) {
        errors.push(e.into());
    }

    let timeouts = [
        ("timeouts.request_secs", config.timeouts.request_secs),
        ("ai_engine.status_timeout_secs", config.ai_engine.status_timeout_secs),
        ("ai_engine.test_timeout_secs", config.ai_engine.test_timeout_secs),
    ];
    for (name, secs) in timeouts {
        if secs == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
