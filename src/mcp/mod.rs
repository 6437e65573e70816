pub mod client;
pub mod target;

pub use client::McpClient;
pub use target::Target;
