//! Momentum MCP Server - Main Entry Point
//!
//! This is the main entry point for the Momentum MCP server application.
//! The actual implementation is in the `momentum_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use momentum_mcp::MomentumServerHandler;

/// Momentum MCP Server - task and habit tracking via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Momentum data file
    file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let handler = MomentumServerHandler::new(&args.file)?;
    serve_stdio(handler).await?;
    Ok(())
}
