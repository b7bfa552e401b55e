use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;

/// JSON-RPC: invalid method parameter(s)
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC: internal error
pub const INTERNAL_ERROR: i32 = -32603;

/// Structured error returned to the agent in the JSON-RPC `error.data` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct McpError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context (offending parameter, HTTP status, trace ID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Whether repeating the same call may succeed
    pub retryable: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Missing or malformed tool argument
    InvalidParameter,
    /// Tool name not registered
    UnknownTool,
    /// API key exchange failed
    AuthFailed,
    /// Data call failed (network or non-2xx)
    RequestFailed,
    /// Trace ID unknown to the service
    TraceNotFound,
    /// Local configuration problem
    InternalError,
}

impl McpError {
    pub fn invalid_parameter(tool: &str, param_name: &str, reason: &str) -> Self {
        Self {
            code: ErrorCode::InvalidParameter,
            message: format!("Invalid parameter '{}': {}", param_name, reason),
            details: Some(json!({
                "tool": tool,
                "parameter": param_name,
                "reason": reason,
            })),
            retryable: false,
        }
    }

    pub fn missing_parameter(tool: &str, param_name: &str) -> Self {
        Self {
            code: ErrorCode::InvalidParameter,
            message: format!("{} is required", param_name),
            details: Some(json!({
                "tool": tool,
                "missing": [param_name],
            })),
            retryable: false,
        }
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self {
            code: ErrorCode::UnknownTool,
            message: format!("Unknown AgentOps API tool: {}", name),
            details: Some(json!({ "tool": name })),
            retryable: false,
        }
    }

    /// Convert a client error raised while running `tool`.
    pub fn from_sdk(tool: &str, err: Error) -> Self {
        match err {
            Error::Validation(agentops_types::Error::MissingParameter(name)) => {
                Self::missing_parameter(tool, &name)
            }
            Error::Validation(agentops_types::Error::InvalidParameter { name, reason }) => {
                Self::invalid_parameter(tool, &name, &reason)
            }
            Error::Auth(msg) => Self {
                code: ErrorCode::AuthFailed,
                message: msg,
                details: Some(json!({ "tool": tool })),
                retryable: false,
            },
            Error::Request { status, message } => Self {
                code: ErrorCode::RequestFailed,
                message,
                details: Some(json!({ "tool": tool, "status": status })),
                // 4xx will fail the same way again; network errors and 5xx may not
                retryable: status.is_none_or(|s| s >= 500),
            },
            Error::NotFound(trace_id) => Self {
                code: ErrorCode::TraceNotFound,
                message: format!("Trace not found: {}", trace_id),
                details: Some(json!({ "tool": tool, "trace_id": trace_id })),
                retryable: false,
            },
            Error::Config(msg) => Self {
                code: ErrorCode::InternalError,
                message: msg,
                details: None,
                retryable: false,
            },
        }
    }

    /// JSON-RPC error code for this failure.
    pub fn rpc_code(&self) -> i32 {
        match self.code {
            ErrorCode::InvalidParameter | ErrorCode::UnknownTool => INVALID_PARAMS,
            ErrorCode::AuthFailed
            | ErrorCode::RequestFailed
            | ErrorCode::TraceNotFound
            | ErrorCode::InternalError => INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for McpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for McpError {}
