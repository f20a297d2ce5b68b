//! autobahn-mcp: Autobahn Traffic MCP Server
//!
//! Serves live German autobahn traffic data (warnings, closures, EV
//! charging stations) as MCP tools over stdio.
//!
//! Usage:
//!   autobahn-mcp           - Serve MCP over stdio
//!   autobahn-mcp --help    - Show help
//!   autobahn-mcp --version - Show version

mod server;

use std::sync::Arc;

use autobahn_api::AutobahnClient;
use autobahn_core::{Config, ToolManager};
use autobahn_tools::register_default_tools;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

use crate::server::AutobahnServer;

/// Run mode
enum RunMode {
    /// Serve MCP over stdio
    Serve,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("autobahn-mcp {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Serve => {}
    }

    // stdout carries the MCP protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting autobahn-mcp...");
    tracing::info!("API base URL: {}", config.base_url);

    // Create the API client shared by all tools
    let client = AutobahnClient::new(&config.base_url)
        .map_err(|e| anyhow::anyhow!("Failed to create API client: {}", e))?;

    // Build the tool registry once and hand it to the serving layer
    let mut tool_manager = ToolManager::new();
    register_default_tools(&mut tool_manager, Arc::new(client));

    tracing::info!(
        "Registered {} tools: {:?}",
        tool_manager.len(),
        tool_manager.tool_names()
    );

    let service = AutobahnServer::new(tool_manager)
        .serve(stdio())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start MCP server: {}", e))?;

    tracing::info!("autobahn-mcp serving on stdio");

    service.waiting().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Serve
}

/// Print help message
fn print_help() {
    println!("autobahn-mcp - Autobahn Traffic MCP Server");
    println!();
    println!("Usage:");
    println!("  autobahn-mcp           Serve MCP over stdio");
    println!("  autobahn-mcp --help    Show this help message");
    println!("  autobahn-mcp --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  AUTOBAHN_BASE_URL    API base endpoint (default: https://verkehr.autobahn.de/o/autobahn)");
    println!("  RUST_LOG             Log filter (default: info)");
}
