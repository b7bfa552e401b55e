use std::sync::Arc;

use agentops_types::endpoints::{AUTH_TOKEN_PATH, TRACES_PATH, normalize_base_url};
use agentops_types::{AuthRequest, AuthResponse, Credential, RawResponse, SessionToken};
use reqwest::Url;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::transport::{HttpRequest, Transport};

/// Authenticate-then-fetch client for one AgentOps API base URL.
///
/// Holds no session state: every `fetch_*` call performs a fresh key exchange
/// followed by exactly one data call. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List the most recent traces: exchange, then `GET /v4/traces`.
    pub async fn fetch_traces(&self, credential: &Credential, limit: u32) -> Result<RawResponse> {
        ensure_positive_limit(limit)?;
        let token = self.exchange(credential).await?;
        self.list_traces(&token, limit).await
    }

    /// Fetch one trace with all spans: exchange, then `GET /v4/traces/{id}`.
    pub async fn fetch_trace_detail(
        &self,
        credential: &Credential,
        trace_id: &str,
    ) -> Result<RawResponse> {
        let trace_id = ensure_trace_id(trace_id)?;
        let token = self.exchange(credential).await?;
        self.trace_detail(&token, trace_id).await
    }

    /// Trade the long-lived API key for a short-lived bearer token.
    pub async fn exchange(&self, credential: &Credential) -> Result<SessionToken> {
        let url = self.endpoint(AUTH_TOKEN_PATH, None)?;
        debug!(%url, "exchanging API key for session token");

        let body = serde_json::to_value(AuthRequest::from_credential(credential))
            .map_err(|e| Error::Auth(format!("Failed to encode auth request: {}", e)))?;

        let response = self
            .transport
            .send(HttpRequest::post_json(url, body))
            .await
            .map_err(|e| {
                warn!(error = %e, "auth endpoint unreachable");
                Error::Auth(format!("Failed to authenticate with AgentOps API: {}", e))
            })?;

        if !response.is_success() {
            warn!(status = response.status, "API key rejected");
            return Err(Error::Auth(format!(
                "Failed to authenticate with AgentOps API: HTTP {}",
                response.status
            )));
        }

        let auth: AuthResponse = serde_json::from_str(&response.body).map_err(|e| {
            Error::Auth(format!("Unexpected auth response from AgentOps API: {}", e))
        })?;

        let token = auth.into_session_token().ok_or_else(|| {
            Error::Auth("Failed to get JWT token from AgentOps API: No token in response".to_string())
        })?;
        debug!(project_id = ?token.project_id(), "obtained session token");

        Ok(token)
    }

    pub async fn list_traces(&self, token: &SessionToken, limit: u32) -> Result<RawResponse> {
        ensure_positive_limit(limit)?;

        let mut url = self.endpoint(TRACES_PATH, None)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        debug!(%url, limit, "listing traces");

        let response = self
            .transport
            .send(HttpRequest::get(url, token))
            .await
            .map_err(|e| Error::request(None, format!("Failed to list AgentOps API traces: {}", e)))?;

        if !response.is_success() {
            warn!(status = response.status, "trace listing failed");
            return Err(Error::request(
                Some(response.status),
                format!("Failed to list AgentOps API traces: {}", response.body.trim()),
            ));
        }

        Ok(RawResponse::new(response.body))
    }

    pub async fn trace_detail(&self, token: &SessionToken, trace_id: &str) -> Result<RawResponse> {
        let trace_id = ensure_trace_id(trace_id)?;

        let url = self.endpoint(TRACES_PATH, Some(trace_id))?;
        debug!(%url, "fetching trace detail");

        let response = self
            .transport
            .send(HttpRequest::get(url, token))
            .await
            .map_err(|e| {
                Error::request(None, format!("Failed to get trace detail for {}: {}", trace_id, e))
            })?;

        match response.status {
            404 => Err(Error::NotFound(trace_id.to_string())),
            status if !response.is_success() => {
                warn!(status, trace_id, "trace detail failed");
                Err(Error::request(
                    Some(status),
                    format!(
                        "Failed to get trace detail for {}: {}",
                        trace_id,
                        response.body.trim()
                    ),
                ))
            }
            _ => Ok(RawResponse::new(response.body)),
        }
    }

    /// Append `path` (and an optional percent-encoded trailing segment) to the base URL.
    fn endpoint(&self, path: &str, segment: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid_base_url("URL cannot be used as a base"))?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let normalized = normalize_base_url(base_url);
    if normalized.is_empty() {
        return Err(Error::Validation(agentops_types::Error::missing(
            "AGENTOPS_API_URL",
        )));
    }

    let url = Url::parse(normalized).map_err(|e| invalid_base_url(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_base_url(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(invalid_base_url("URL cannot be used as a base"));
    }
    Ok(url)
}

fn invalid_base_url(reason: impl Into<String>) -> Error {
    Error::Validation(agentops_types::Error::invalid("AGENTOPS_API_URL", reason))
}

fn ensure_positive_limit(limit: u32) -> Result<()> {
    if limit == 0 {
        return Err(Error::Validation(agentops_types::Error::invalid(
            "limit",
            "must be a positive integer",
        )));
    }
    Ok(())
}

fn ensure_trace_id(trace_id: &str) -> Result<&str> {
    let trace_id = trace_id.trim();
    if trace_id.is_empty() {
        return Err(Error::Validation(agentops_types::Error::missing("trace_id")));
    }
    Ok(trace_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, TransportError};
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn send(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            Err(TransportError("connection refused".to_string()))
        }
    }

    fn client(base_url: &str) -> Result<ApiClient> {
        ApiClient::new(Arc::new(Unreachable), base_url)
    }

    #[test]
    fn test_endpoint_paths() {
        let client = client("https://api.agentops.ai/").unwrap();
        assert_eq!(
            client.endpoint(AUTH_TOKEN_PATH, None).unwrap().as_str(),
            "https://api.agentops.ai/v3/auth/token"
        );
        assert_eq!(
            client.endpoint(TRACES_PATH, Some("abc/def")).unwrap().as_str(),
            "https://api.agentops.ai/v4/traces/abc%2Fdef"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = client("http://localhost:8000/proxy/").unwrap();
        assert_eq!(
            client.endpoint(TRACES_PATH, None).unwrap().as_str(),
            "http://localhost:8000/proxy/v4/traces"
        );
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        for bad in ["", "not a url", "ftp://example.com", "mailto:ops@example.com"] {
            let err = client(bad).err().unwrap();
            assert!(err.is_validation(), "{} should be rejected", bad);
        }
    }

    #[tokio::test]
    async fn test_network_failure_during_exchange_is_auth_error() {
        let client = client("https://api.agentops.ai").unwrap();
        let credential = Credential::new("key-123").unwrap();
        let err = client.fetch_traces(&credential, 5).await.unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn test_network_failure_during_data_call_is_request_error() {
        let client = client("https://api.agentops.ai").unwrap();
        let token = SessionToken::new("jwt", None);
        let err = client.list_traces(&token, 5).await.unwrap_err();
        assert!(matches!(err, Error::Request { status: None, .. }));
    }
}
