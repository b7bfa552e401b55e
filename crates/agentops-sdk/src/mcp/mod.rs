//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes `list_traces` and `trace_detail` to AI agents via JSON-RPC over stdio.

pub mod error;
mod server;
mod tools;

pub use error::{ErrorCode, McpError};
pub use server::{AgentOpsServer, PROTOCOL_VERSION, SERVER_NAME, run_server, serve};
pub use tools::{LIST_TRACES, TRACE_DETAIL, ToolRegistry};
