use agentops_sdk::ApiConfig;
use agentops_sdk::mcp::{self, ToolRegistry};
use anyhow::Result;

pub async fn handle(config: &ApiConfig) -> Result<()> {
    let registry = ToolRegistry::new(config.api_url.clone(), super::transport(config)?);
    tracing::info!(default_api_url = %registry.default_api_url(), "starting MCP server on stdio");
    mcp::run_server(registry).await
}
