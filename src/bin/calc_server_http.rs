use anyhow::Result;
use axum::Router;
use mcp_invoke::{calc::Calculator, logging};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tracing::info;

const BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let service = StreamableHttpService::new(
        || Ok(Calculator::new()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let app = Router::new().nest_service("/mcp", service);
    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!(bind_addr = BIND_ADDR, "calculator server listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
