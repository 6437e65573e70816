use anyhow::Result;
use mcp_invoke::{calc::Calculator, logging};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let service = Calculator::new().serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
