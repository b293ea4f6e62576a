//! Folk MCP Server - Main entry point
//!
//! This is the main executable for the Folk MCP Server, which provides a Model
//! Context Protocol (MCP) interface to the Folk CRM.

use anyhow::Result;
use folk_mcp_server::client::{AsyncFolkClient, AsyncFolkClientImpl};
use folk_mcp_server::{Config, FolkClient, FolkMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Folk MCP Server with API URL: {}",
        config.api_base_url
    );

    // Initialize Folk client
    let sync_client = FolkClient::new(&config);
    let client = Arc::new(AsyncFolkClientImpl::new(sync_client)) as Arc<dyn AsyncFolkClient>;

    // Create the MCP server (tools are constructed internally)
    let server = FolkMcpServer::new(client, config.default_page_limit);

    info!("Folk MCP Server initialized");

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    folk_mcp_server::server::run_server(server).await?;

    info!("Folk MCP Server shutdown complete");
    Ok(())
}
