//! Kekkai MCP server binary.
//!
//! Secure filesystem access over MCP, restricted to the directories given
//! on the command line.
//!
//! Usage:
//!   cargo run -p kekkai-mcp -- <allowed-directory> [additional-directories...]
//!
//! Test with MCP inspector:
//!   npx @modelcontextprotocol/inspector cargo run -p kekkai-mcp -- /tmp

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{EnvFilter, fmt};

use kekkai_mcp::KekkaiMcp;
use kekkai_sandbox::AllowedRoots;

/// MCP server exposing sandboxed filesystem tools.
#[derive(Parser, Debug)]
#[command(name = "kekkai-mcp")]
#[command(about = "Secure filesystem MCP server")]
struct Args {
    /// Directories the server is allowed to access (at least one)
    #[arg(required = true, value_name = "ALLOWED_DIR")]
    allowed_directories: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr (MCP uses stdio for protocol)
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let roots = AllowedRoots::resolve(&args.allowed_directories)?;
    tracing::info!(
        "Secure MCP Filesystem Server starting with {} allowed directories",
        roots.len()
    );

    let service = KekkaiMcp::new(roots)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("MCP server error: {:?}", e);
        })?;

    tracing::info!("kekkai-mcp server ready");

    service.waiting().await?;

    tracing::info!("kekkai-mcp server shutting down");
    Ok(())
}
