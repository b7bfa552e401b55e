//! Testing infrastructure for agentops integration tests.
//!
//! - `FakeApi`: in-memory AgentOps API implementing the SDK `Transport`
//! - `fixtures`: sample traces in the shape the service returns
//! - `process`: stdio harness for driving the MCP server binary

pub mod fake_api;
pub mod fixtures;
pub mod process;

pub use fake_api::{FakeApi, RecordedRequest};
pub use process::McpHarness;
