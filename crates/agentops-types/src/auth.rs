use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Long-lived AgentOps API key.
///
/// Only lives for the duration of one call and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key, rejecting blank input.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let trimmed = api_key.trim();
        if trimmed.is_empty() {
            return Err(Error::missing("AGENTOPS_API_KEY"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Bearer token obtained from a single key exchange. Never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    token: String,
    project_id: Option<String>,
}

impl SessionToken {
    pub fn new(token: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            token: token.into(),
            project_id,
        }
    }

    pub fn bearer(&self) -> &str {
        &self.token
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"***")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Body of `POST /v3/auth/token`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    pub api_key: String,
}

impl AuthRequest {
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            api_key: credential.expose().to_string(),
        }
    }
}

/// Successful answer of the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl AuthResponse {
    /// Converts into a token; `None` when the service omitted it or sent an empty one.
    pub fn into_session_token(self) -> Option<SessionToken> {
        match self.token {
            Some(token) if !token.is_empty() => Some(SessionToken::new(token, self.project_id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejects_blank() {
        assert_eq!(
            Credential::new("   ").unwrap_err(),
            Error::missing("AGENTOPS_API_KEY")
        );
        assert_eq!(Credential::new(" key-123 ").unwrap().expose(), "key-123");
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let credential = Credential::new("super-secret").unwrap();
        assert!(!format!("{:?}", credential).contains("super-secret"));

        let token = SessionToken::new("jwt-value", Some("proj-1".to_string()));
        let debug = format!("{:?}", token);
        assert!(!debug.contains("jwt-value"));
        assert!(debug.contains("proj-1"));
    }

    #[test]
    fn test_auth_response_without_token() {
        let response: AuthResponse = serde_json::from_str(r#"{"project_id": "p"}"#).unwrap();
        assert!(response.into_session_token().is_none());

        let response: AuthResponse = serde_json::from_str(r#"{"token": ""}"#).unwrap();
        assert!(response.into_session_token().is_none());

        let response: AuthResponse =
            serde_json::from_str(r#"{"token": "jwt", "project_id": "p"}"#).unwrap();
        let token = response.into_session_token().unwrap();
        assert_eq!(token.bearer(), "jwt");
        assert_eq!(token.project_id(), Some("p"));
    }
}
