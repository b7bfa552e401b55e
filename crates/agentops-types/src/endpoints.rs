//! Fixed endpoint paths of the AgentOps API.

/// Production AgentOps API.
pub const DEFAULT_API_URL: &str = "https://api.agentops.ai";

/// Exchanges an API key for a JWT.
pub const AUTH_TOKEN_PATH: &str = "/v3/auth/token";

/// Trace listing; a single trace lives under `TRACES_PATH/{trace_id}`.
pub const TRACES_PATH: &str = "/v4/traces";

/// Strip trailing slashes so paths can be appended with `format!`.
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim().trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.agentops.ai/"),
            "https://api.agentops.ai"
        );
        assert_eq!(
            normalize_base_url(" http://localhost:8000// "),
            "http://localhost:8000"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }
}
