//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the MCP status proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream AI engine settings.
    pub ai_engine: AiEngineConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one inbound request, in seconds.
    /// Must stay above the longest upstream timeout.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Default health-check URL, assuming the engine is co-located.
pub const DEFAULT_HEALTH_CHECK_URL: &str = "http://127.0.0.1:15000/health";

/// Environment variable overriding [`AiEngineConfig::health_check_url`].
pub const HEALTH_CHECK_URL_ENV: &str = "HEALTH_CHECK_AI_ENGINE_URL";

/// AI engine (upstream) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiEngineConfig {
    /// Engine health-check URL; the upstream base is derived from it.
    pub health_check_url: String,

    /// Timeout for `GET /mcp/status`, in seconds.
    pub status_timeout_secs: u64,

    /// Timeout for `POST /mcp/test/{id}`, in seconds.
    /// Longer than the status check since server tests probe the network themselves.
    pub test_timeout_secs: u64,
}

impl Default for AiEngineConfig {
    fn default() -> Self {
        Self {
            health_check_url: DEFAULT_HEALTH_CHECK_URL.to_string(),
            status_timeout_secs: 5,
            test_timeout_secs: 15,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
