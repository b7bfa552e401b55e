//! In-memory stand-in for the AgentOps API.
//!
//! Behaves like the real service for the three endpoints the SDK uses and
//! records every request, so tests can assert on what went over the wire.

use std::collections::HashMap;
use std::sync::Mutex;

use agentops_sdk::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::fixtures::{PROJECT_ID, VALID_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub path: String,
    pub query: Option<String>,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    valid_keys: Vec<String>,
    traces: Vec<Value>,
    issued_tokens: Vec<String>,
    overrides: HashMap<String, HttpResponse>,
    unreachable: bool,
    requests: Vec<RecordedRequest>,
}

pub struct FakeApi {
    state: Mutex<State>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeApi {
    /// Accepts `fixtures::VALID_KEY`, serves no traces.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                valid_keys: vec![VALID_KEY.to_string()],
                ..State::default()
            }),
        }
    }

    pub fn with_key(self, key: &str) -> Self {
        self.lock().valid_keys.push(key.to_string());
        self
    }

    /// Trace detail documents, newest first.
    pub fn with_traces(self, traces: Vec<Value>) -> Self {
        self.lock().traces = traces;
        self
    }

    /// Answer every request to `path` with a canned response.
    pub fn override_path(self, path: &str, status: u16, body: &str) -> Self {
        self.lock()
            .overrides
            .insert(path.to_string(), HttpResponse::new(status, body));
        self
    }

    /// Every request fails before reaching the service.
    pub fn unreachable(self) -> Self {
        self.lock().unreachable = true;
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Requests other than the key exchange.
    pub fn data_calls(&self) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.path != "/v3/auth/token")
            .count()
    }

    pub fn issued_tokens(&self) -> Vec<String> {
        self.lock().issued_tokens.clone()
    }

    /// Exact body served for `GET /v4/traces/{trace_id}`.
    pub fn detail_body(&self, trace_id: &str) -> Option<String> {
        let state = self.lock();
        find_trace(&state.traces, trace_id).map(|t| t.to_string())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake api state poisoned")
    }

    fn respond(state: &mut State, request: &RecordedRequest) -> HttpResponse {
        if let Some(response) = state.overrides.get(&request.path) {
            return response.clone();
        }

        if request.path == "/v3/auth/token" {
            return Self::respond_auth(state, request);
        }

        let authorized = request
            .bearer
            .as_ref()
            .is_some_and(|token| state.issued_tokens.contains(token));
        if !authorized {
            return HttpResponse::new(401, json!({ "detail": "Not authenticated" }).to_string());
        }

        match request.path.strip_prefix("/v4/traces") {
            Some("") | Some("/") => Self::respond_listing(state, request),
            Some(rest) => {
                let trace_id = rest.trim_start_matches('/');
                match find_trace(&state.traces, trace_id) {
                    Some(trace) => HttpResponse::new(200, trace.to_string()),
                    None => HttpResponse::new(
                        404,
                        json!({ "detail": format!("Trace {} not found", trace_id) }).to_string(),
                    ),
                }
            }
            None => HttpResponse::new(404, json!({ "detail": "Not Found" }).to_string()),
        }
    }

    fn respond_auth(state: &mut State, request: &RecordedRequest) -> HttpResponse {
        let api_key = request
            .body
            .as_ref()
            .and_then(|b| b.get("api_key"))
            .and_then(|k| k.as_str());

        match api_key {
            Some(key) if state.valid_keys.iter().any(|k| k == key) => {
                let token = format!("jwt-{}", state.issued_tokens.len() + 1);
                state.issued_tokens.push(token.clone());
                HttpResponse::new(
                    200,
                    json!({ "token": token, "project_id": PROJECT_ID }).to_string(),
                )
            }
            _ => HttpResponse::new(401, json!({ "detail": "Invalid API key" }).to_string()),
        }
    }

    fn respond_listing(state: &State, request: &RecordedRequest) -> HttpResponse {
        let limit = request
            .query
            .as_deref()
            .and_then(|q| {
                q.split('&')
                    .find_map(|pair| pair.strip_prefix("limit="))
                    .and_then(|v| v.parse::<usize>().ok())
            })
            .unwrap_or(20);

        let traces: Vec<Value> = state
            .traces
            .iter()
            .take(limit)
            .map(crate::fixtures::trace_summary)
            .collect();

        HttpResponse::new(
            200,
            json!({ "traces": traces, "total": state.traces.len() }).to_string(),
        )
    }
}

fn find_trace<'a>(traces: &'a [Value], trace_id: &str) -> Option<&'a Value> {
    traces
        .iter()
        .find(|t| t["trace_id"].as_str() == Some(trace_id))
}

#[async_trait]
impl Transport for FakeApi {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let recorded = RecordedRequest {
            method: request.method,
            url: request.url.to_string(),
            path: request.url.path().to_string(),
            query: request.url.query().map(str::to_string),
            bearer: request.bearer.as_ref().map(|t| t.bearer().to_string()),
            body: request.json_body.clone(),
        };

        let mut state = self.lock();
        state.requests.push(recorded.clone());

        if state.unreachable {
            return Err(TransportError("connection refused".to_string()));
        }

        Ok(Self::respond(&mut state, &recorded))
    }
}
