//! Structured logging.
//!
//! `RUST_LOG` takes precedence; otherwise the configured log level applies
//! to this crate and to `tower_http` request spans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter directives for a log level.
pub fn default_directives(log_level: &str) -> String {
    format!("mcp_status_proxy={level},tower_http={level}", level = log_level)
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(&config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives("debug");
        assert_eq!(directives, "mcp_status_proxy=debug,tower_http=debug");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
