//! Upstream (AI engine) subsystem.
//!
//! # Data Flow
//! ```text
//! admin handler
//!     → client.rs (build endpoint from base, send with per-call timeout)
//!     → AI engine /mcp/status or /mcp/test/{id}
//!     → client.rs (accept status? parse JSON body)
//!     → UpstreamReply | UpstreamError
//!     → http/response.rs (map to inbound response)
//! ```
//!
//! The engine owns the MCP protocol; nothing here knows its semantics
//! beyond status codes and opaque JSON bodies.

pub mod base_url;
pub mod client;
pub mod error;

pub use base_url::{derive_base_url, BaseUrl, BaseUrlError};
pub use client::{AiEngineClient, Operation, UpstreamReply};
pub use error::{ClientBuildError, UpstreamError, UNREACHABLE_DETAIL};
