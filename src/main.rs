//! MCP status proxy.
//!
//! Serves two admin endpoints and forwards them to the AI engine.
//!
//! ```text
//! Admin UI                      mcp-proxy                        AI Engine
//!   GET  /api/mcp/status      ─▶ admin handler ─▶ upstream ─▶  GET  /mcp/status       (5s)
//!   POST /api/mcp/servers/    ─▶ admin handler ─▶ upstream ─▶  POST /mcp/test/{id}    (15s)
//!        {id}/test
//!   ◀─ engine JSON, or {"detail": ...} on failure
//! ```

use clap::Parser;
use std::path::PathBuf;

use mcp_status_proxy::config::load_config;
use mcp_status_proxy::lifecycle::startup;
use mcp_status_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "mcp-proxy", version)]
#[command(about = "Proxies MCP status and server tests to the AI engine", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        health_check_url = %config.ai_engine.health_check_url,
        "mcp-proxy starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
