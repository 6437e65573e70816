use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "invoke")]
#[command(
    about = "Connect to an MCP server, list its tools, and optionally invoke one",
    long_about = None
)]
pub struct Args {
    #[arg(
        help = "Server to connect to: a local .py/.js script, or an http(s) URL ending in /sse or /mcp"
    )]
    pub target: String,

    #[arg(help = "Tool name to invoke after connecting, followed by key=value parameters")]
    pub tool_and_params: Vec<String>,
}
