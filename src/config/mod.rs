//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (HEALTH_CHECK_AI_ENGINE_URL override, read once)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → injected into the upstream client at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; nothing re-reads the environment per request
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AiEngineConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, TimeoutConfig};
