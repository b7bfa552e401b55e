//! agentops-sdk: AgentOps API access for AI agents.
//!
//! # Overview
//!
//! Every operation exchanges a long-lived API key for a short-lived bearer
//! token and then performs exactly one authenticated call. Response bodies are
//! returned exactly as the service sent them. Tokens are never cached and
//! failed calls are never retried.
//!
//! The same client powers the MCP server ([`mcp`]) and the direct CLI commands.
//!
//! # Quickstart
//!
//! ```no_run
//! use std::sync::Arc;
//! use agentops_sdk::{ApiClient, Credential, ReqwestTransport, DEFAULT_API_URL};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(ReqwestTransport::new(None)?);
//! let client = ApiClient::new(transport, DEFAULT_API_URL)?;
//! let credential = Credential::new("key-123")?;
//!
//! let listing = client.fetch_traces(&credential, 10).await?;
//! println!("{}", listing);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `client`: authenticate-then-fetch operations
//! - `transport`: HTTP seam (`reqwest` in production, fakes in tests)
//! - `config`: API URL / timeout resolution
//! - `mcp`: tool registry and JSON-RPC stdio server

pub mod client;
pub mod config;
pub mod error;
pub mod mcp;
pub mod transport;

pub use agentops_types::{
    Credential, DEFAULT_API_URL, DEFAULT_LIST_LIMIT, ListTracesArgs, RawResponse, SessionToken,
    TraceDetailArgs,
};
pub use client::ApiClient;
pub use config::{ApiConfig, ConfigFile};
pub use error::{Error, Result};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};
