use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation},
    service::{RoleClient, RunningService},
    transport::{
        ConfigureCommandExt, SseClientTransport, StreamableHttpClientTransport, TokioChildProcess,
    },
    ServiceExt,
};
use serde_json::{Map, Value};
use tokio::process::Command;

use crate::error::InvokeError;
use crate::mcp::target::{classify, Target};
use crate::output;

/// Client holding at most one live session against a tool server.
///
/// `connect` picks the transport from the target string, runs the initialize
/// handshake, and prints the advertised tools. `shutdown` tears the session
/// down and is safe to call on every exit path.
pub struct McpClient {
    session: Option<RunningService<RoleClient, ClientInfo>>,
    tool_names: Vec<String>,
}

impl McpClient {
    pub fn new() -> Self {
        Self {
            session: None,
            tool_names: Vec::new(),
        }
    }

    /// Classify `target` and establish a session over the selected transport.
    pub async fn connect(&mut self, target: &str) -> Result<()> {
        let target = classify(target)?;
        self.connect_target(target).await
    }

    /// Establish a session over an already-classified target.
    pub async fn connect_target(&mut self, target: Target) -> Result<()> {
        // Only one session may be live at a time; drop any previous one.
        self.shutdown().await?;

        let session = match target {
            Target::Stdio { command, args } => {
                let transport = TokioChildProcess::new(Command::new(&command).configure(|cmd| {
                    for arg in &args {
                        cmd.arg(arg);
                    }
                }))?;
                client_info().serve(transport).await?
            }
            Target::Sse { url } => {
                let transport = SseClientTransport::start(url).await?;
                client_info().serve(transport).await?
            }
            Target::StreamableHttp { url } => {
                let transport = StreamableHttpClientTransport::from_uri(url);
                client_info().serve(transport).await?
            }
        };

        let tools = session.list_tools(Default::default()).await?.tools;
        self.tool_names = tools.iter().map(|t| t.name.to_string()).collect();
        output::display_connected(&self.tool_names);
        self.session = Some(session);
        Ok(())
    }

    /// Tool names advertised by the connected server.
    pub fn tool_names(&self) -> &[String] {
        &self.tool_names
    }

    /// Invoke `name` with `params`, printing a summary line before the call
    /// and a result line after. Returns the rendered result text.
    pub async fn call_tool(&self, name: &str, params: Map<String, Value>) -> Result<String> {
        let session = self.session.as_ref().ok_or(InvokeError::NotInitialized)?;

        output::display_call(name, &Value::Object(params.clone()));
        let result = session
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: Some(params),
            })
            .await?;

        Ok(output::display_result(&serde_json::to_value(&result)?))
    }

    /// Tear down the current session, if any. Safe to call repeatedly.
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            self.tool_names.clear();
            session.cancel().await?;
        }
        Ok(())
    }
}

impl Default for McpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn client_info() -> ClientInfo {
    ClientInfo {
        protocol_version: Default::default(),
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn call_before_connect_is_rejected() {
        let client = McpClient::new();
        let err = client.call_tool("add", Map::new()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InvokeError>(),
            Some(InvokeError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn connect_rejects_unclassifiable_targets() {
        let mut client = McpClient::new();
        let err = client.connect("foo.txt").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InvokeError>(),
            Some(InvokeError::InvalidTarget(_))
        ));
    }

    #[tokio::test]
    async fn shutdown_without_a_session_is_a_no_op() {
        let mut client = McpClient::new();
        client.shutdown().await.unwrap();
        client.shutdown().await.unwrap();
    }
}
