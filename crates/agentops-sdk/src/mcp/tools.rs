//! MCP tool registry and handlers.

use std::sync::Arc;

use agentops_types::{ListTracesArgs, RawResponse, TraceDetailArgs};
use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::error::McpError;
use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::Transport;

pub const LIST_TRACES: &str = "list_traces";
pub const TRACE_DETAIL: &str = "trace_detail";

/// Maps the two public tool names onto client calls.
///
/// The default API URL is fixed at construction; each call may override it
/// through `AGENTOPS_API_URL`.
#[derive(Clone)]
pub struct ToolRegistry {
    default_api_url: String,
    transport: Arc<dyn Transport>,
}

impl ToolRegistry {
    pub fn new(default_api_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            default_api_url: default_api_url.into(),
            transport,
        }
    }

    pub fn default_api_url(&self) -> &str {
        &self.default_api_url
    }

    /// Tool definitions for `tools/list`.
    pub fn tools(&self) -> Vec<Value> {
        vec![
            json!({
                "name": LIST_TRACES,
                "description": format!(
                    "List traces from AgentOps API. Returns the most recent traces of your project \
                     (trace ID, number of spans, start time, end time) and the total number of traces. \
                     Requires AGENTOPS_API_KEY. Optional AGENTOPS_API_URL overrides the API endpoint (default: {}).",
                    self.default_api_url
                ),
                "inputSchema": self.input_schema::<ListTracesArgs>(),
            }),
            json!({
                "name": TRACE_DETAIL,
                "description": format!(
                    "Get detailed information about a specific trace from AgentOps API, including all spans, \
                     metadata and timing information. Requires AGENTOPS_API_KEY and trace_id (from the trace_id \
                     field in the list_traces response). Optional AGENTOPS_API_URL overrides the API endpoint (default: {}).",
                    self.default_api_url
                ),
                "inputSchema": self.input_schema::<TraceDetailArgs>(),
            }),
        ]
    }

    /// Run a tool and return the service's response body untouched.
    pub async fn call(&self, name: &str, arguments: Value) -> std::result::Result<RawResponse, McpError> {
        info!(tool = name, "tool call");
        match name {
            LIST_TRACES => {
                let args: ListTracesArgs = parse_arguments(LIST_TRACES, arguments)?;
                self.list_traces(args)
                    .await
                    .map_err(|e| McpError::from_sdk(LIST_TRACES, e))
            }
            TRACE_DETAIL => {
                let args: TraceDetailArgs = parse_arguments(TRACE_DETAIL, arguments)?;
                self.trace_detail(args)
                    .await
                    .map_err(|e| McpError::from_sdk(TRACE_DETAIL, e))
            }
            _ => Err(McpError::unknown_tool(name)),
        }
    }

    async fn list_traces(&self, args: ListTracesArgs) -> Result<RawResponse> {
        let credential = args.credential()?;
        let limit = args.limit()?;
        let client = self.client_for(args.api_url.as_deref())?;
        client.fetch_traces(&credential, limit).await
    }

    async fn trace_detail(&self, args: TraceDetailArgs) -> Result<RawResponse> {
        let credential = args.credential()?;
        let trace_id = args.trace_id()?;
        let client = self.client_for(args.api_url.as_deref())?;
        client.fetch_trace_detail(&credential, trace_id).await
    }

    fn client_for(&self, api_url: Option<&str>) -> Result<ApiClient> {
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(self.default_api_url.as_str());
        debug!(api_url, "using AgentOps API");
        ApiClient::new(self.transport.clone(), api_url)
    }

    /// Schema generated from the argument type, with the registry's default URL filled in.
    fn input_schema<T: schemars::JsonSchema>(&self) -> Value {
        let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|_| json!({}));
        if let Some(url) = schema.pointer_mut("/properties/AGENTOPS_API_URL") {
            url["default"] = json!(self.default_api_url);
        }
        schema
    }
}

fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Value,
) -> std::result::Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| validation_error(tool, e))
}

/// Convert a serde deserialization error into a parameter error,
/// naming the missing field when serde reports one.
fn validation_error(tool: &str, error: serde_json::Error) -> McpError {
    let error_msg = error.to_string();

    if let Some(rest) = error_msg.strip_prefix("missing field `")
        && let Some(end) = rest.find('`')
    {
        return McpError::missing_parameter(tool, &rest[..end]);
    }

    McpError::invalid_parameter(tool, "arguments", &error_msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::error::ErrorCode;
    use crate::transport::{HttpRequest, HttpResponse, TransportError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers every request with 500.
    #[derive(Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn send(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(500, "boom"))
        }
    }

    fn registry() -> (ToolRegistry, Arc<CountingTransport>) {
        let transport = Arc::new(CountingTransport::default());
        (
            ToolRegistry::new("https://api.agentops.ai", transport.clone()),
            transport,
        )
    }

    #[test]
    fn test_tools_list_schemas() {
        let (registry, _) = registry();
        let tools = registry.tools();
        let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
        assert_eq!(names, vec![LIST_TRACES, TRACE_DETAIL]);

        for tool in &tools {
            let schema = &tool["inputSchema"];
            assert_eq!(schema["type"], "object");
            assert_eq!(
                schema["properties"]["AGENTOPS_API_URL"]["default"],
                "https://api.agentops.ai"
            );
            assert!(
                tool["description"]
                    .as_str()
                    .unwrap()
                    .contains("https://api.agentops.ai")
            );
        }
    }

    #[tokio::test]
    async fn test_missing_trace_id_never_touches_network() {
        let (registry, transport) = registry();
        let err = registry
            .call(TRACE_DETAIL, json!({ "AGENTOPS_API_KEY": "key-123" }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(err.details.unwrap()["missing"], json!(["trace_id"]));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_never_touches_network() {
        let (registry, transport) = registry();
        for args in [json!({}), json!({ "AGENTOPS_API_KEY": "" })] {
            let err = registry.call(LIST_TRACES, args).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidParameter);
            assert_eq!(err.message, "AGENTOPS_API_KEY is required");
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_limit_is_rejected() {
        let (registry, transport) = registry();
        for limit in [json!(0), json!(-1), json!("ten"), json!(2.5)] {
            let err = registry
                .call(LIST_TRACES, json!({ "AGENTOPS_API_KEY": "k", "limit": limit }))
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidParameter, "limit {}", limit);
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bad_api_url_override_is_rejected() {
        let (registry, transport) = registry();
        let err = registry
            .call(
                LIST_TRACES,
                json!({ "AGENTOPS_API_KEY": "k", "AGENTOPS_API_URL": "not a url" }),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (registry, _) = registry();
        let err = registry.call("delete_traces", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownTool);
    }

    #[tokio::test]
    async fn test_rejected_exchange_stops_after_one_call() {
        let (registry, transport) = registry();
        let err = registry
            .call(LIST_TRACES, json!({ "AGENTOPS_API_KEY": "k" }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthFailed);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}
