//! Freshdesk MCP - MCP server for the Freshdesk helpdesk
//!
//! This binary runs as an MCP server using stdio transport.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHDESK_DOMAIN`: Helpdesk domain, e.g. `acme.freshdesk.com`
//! - `FRESHDESK_API_KEY`: API key of an agent
//!
//! # Usage
//!
//! ```bash
//! FRESHDESK_DOMAIN=acme.freshdesk.com FRESHDESK_API_KEY=... ./freshdesk-mcp
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use freshdesk_mcp::{client, config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // stdout is reserved for MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("freshdesk_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Freshdesk MCP server v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(domain = %config.domain, "Configuration loaded");

    let client = client::FreshdeskClient::new(&config).context("Failed to create Freshdesk client")?;

    tracing::debug!(base_url = %client.base_url(), "Freshdesk client initialized");

    tracing::info!("Testing connection to Freshdesk...");
    if let Err(e) = client.test_connection().await {
        tracing::error!(error = %e.sanitized_display(&config.api_key), "Connection test failed");
        // Keep serving: the helpdesk may become reachable later.
        tracing::warn!(
            "Server will start but may not be able to reach Freshdesk. \
             Check configuration and network connectivity."
        );
    }

    let server = server::FreshdeskServer::new(client);

    tracing::info!("Server initialized, starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
