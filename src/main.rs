use clap::Parser;
use colored::*;
use serde_json::{Map, Value};
use std::process;

use mcp_invoke::{cli::Args, logging, mcp::McpClient, params};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let args = Args::parse();

    let (tool, params) = match params::parse_params(&args.tool_and_params) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    // The session is torn down on every outcome, then the run's result is
    // reported.
    let mut client = McpClient::new();
    let outcome = run(&mut client, &args.target, tool, params).await;
    let cleanup = client.shutdown().await;
    outcome?;
    cleanup
}

async fn run(
    client: &mut McpClient,
    target: &str,
    tool: Option<String>,
    params: Map<String, Value>,
) -> anyhow::Result<()> {
    client.connect(target).await?;
    if let Some(tool) = tool {
        client.call_tool(&tool, params).await?;
    }
    Ok(())
}
