// MCP tool argument types
//
// Schemas are generated from these structs via schemars, so the doc comments
// below are what the calling agent sees. Wire names of the credential and URL
// fields keep the upper-case form existing AgentOps MCP clients already send.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::auth::Credential;
use crate::error::{Error, Result};

/// Number of traces returned when `limit` is omitted.
pub const DEFAULT_LIST_LIMIT: u32 = 5;

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// List the most recent traces of the project, newest first.
///
/// The response contains trace ID, number of spans, start time and end time
/// for each trace, plus the total number of traces of this project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTracesArgs {
    /// AgentOps API key for authentication.
    /// This key is required for all API requests.
    #[serde(rename = "AGENTOPS_API_KEY")]
    pub api_key: String,

    /// Optional custom URL for AgentOps API.
    /// Use this to override the default endpoint when connecting to a non-production server.
    #[serde(rename = "AGENTOPS_API_URL", default)]
    pub api_url: Option<String>,

    /// Maximum number of traces to return
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u32,
}

impl ListTracesArgs {
    pub fn credential(&self) -> Result<Credential> {
        Credential::new(self.api_key.as_str())
    }

    pub fn limit(&self) -> Result<u32> {
        if self.limit == 0 {
            return Err(Error::invalid("limit", "must be a positive integer"));
        }
        Ok(self.limit)
    }
}

/// Retrieve one trace with all of its spans, metadata and timing information.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TraceDetailArgs {
    /// AgentOps API key for authentication.
    /// This key is required for all API requests.
    #[serde(rename = "AGENTOPS_API_KEY")]
    pub api_key: String,

    /// Optional custom URL for AgentOps API.
    /// Use this to override the default endpoint when connecting to a non-production server.
    #[serde(rename = "AGENTOPS_API_URL", default)]
    pub api_url: Option<String>,

    /// Trace ID to retrieve details for (from trace_id field in list_traces response)
    pub trace_id: String,
}

impl TraceDetailArgs {
    pub fn credential(&self) -> Result<Credential> {
        Credential::new(self.api_key.as_str())
    }

    pub fn trace_id(&self) -> Result<&str> {
        let trace_id = self.trace_id.trim();
        if trace_id.is_empty() {
            return Err(Error::missing("trace_id"));
        }
        Ok(trace_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::schema_for;
    use serde_json::json;

    #[test]
    fn test_list_traces_schema() {
        let schema = serde_json::to_value(schema_for!(ListTracesArgs)).unwrap();
        let properties = schema["properties"].as_object().unwrap();

        assert!(properties.contains_key("AGENTOPS_API_KEY"));
        assert!(properties.contains_key("AGENTOPS_API_URL"));
        assert!(properties.contains_key("limit"));
        assert_eq!(properties["limit"]["default"], json!(5));
        assert_eq!(properties["limit"]["minimum"], json!(1));

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["AGENTOPS_API_KEY"]);
    }

    #[test]
    fn test_trace_detail_schema_requires_trace_id() {
        let schema = serde_json::to_value(schema_for!(TraceDetailArgs)).unwrap();
        let required = schema["required"].as_array().unwrap();

        assert!(required.contains(&json!("AGENTOPS_API_KEY")));
        assert!(required.contains(&json!("trace_id")));
        assert!(!required.contains(&json!("AGENTOPS_API_URL")));

        let desc = schema["properties"]["trace_id"]["description"]
            .as_str()
            .unwrap();
        assert!(desc.contains("list_traces"));
    }

    #[test]
    fn test_list_traces_defaults() {
        let args: ListTracesArgs =
            serde_json::from_value(json!({ "AGENTOPS_API_KEY": "key-123" })).unwrap();
        assert_eq!(args.limit().unwrap(), DEFAULT_LIST_LIMIT);
        assert!(args.api_url.is_none());
    }

    #[test]
    fn test_list_traces_rejects_non_positive_limit() {
        let args: ListTracesArgs =
            serde_json::from_value(json!({ "AGENTOPS_API_KEY": "k", "limit": 0 })).unwrap();
        assert_eq!(args.limit().unwrap_err().parameter(), "limit");

        let negative = serde_json::from_value::<ListTracesArgs>(
            json!({ "AGENTOPS_API_KEY": "k", "limit": -3 }),
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_trace_detail_blank_trace_id() {
        let args: TraceDetailArgs = serde_json::from_value(
            json!({ "AGENTOPS_API_KEY": "k", "trace_id": "  " }),
        )
        .unwrap();
        assert_eq!(args.trace_id().unwrap_err(), Error::missing("trace_id"));
    }
}
