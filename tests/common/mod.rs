// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use rhythm_stats::config::Config;
use rhythm_stats::credentials::CredentialProvider;
use rhythm_stats::routes::create_router;
use rhythm_stats::services::CommandService;
use rhythm_stats::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Load a JSON fixture from `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> Value {
    let path = format!("tests/fixtures/{}", name);
    let data = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&data).expect("Fixture is not valid JSON")
}

/// A request seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

type Responses = HashMap<(Method, String), (StatusCode, Value)>;

/// Local stand-in for an upstream REST API.
///
/// Responses are keyed by method and raw (still percent-encoded) path;
/// anything unregistered gets a 404. Every request is recorded.
#[derive(Clone, Default)]
pub struct MockUpstream {
    responses: Arc<Mutex<Responses>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body));
        self
    }

    pub fn get(&self, path: &str, body: Value) -> &Self {
        self.on(Method::GET, path, StatusCode::OK, body)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn called(&self, path: &str) -> bool {
        self.requests().iter().any(|r| r.path == path)
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let addr = listener.local_addr().expect("Mock upstream has no address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{}", addr)
    }
}

async fn record_and_respond(
    State(mock): State<MockUpstream>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    mock.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let response = mock
        .responses
        .lock()
        .unwrap()
        .get(&(method, uri.path().to_string()))
        .cloned();

    match response {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response(),
    }
}

/// Config pointing every upstream at the mock server.
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        osu_api_base: format!("{}/api/v2", base_url),
        osu_token_url: format!("{}/oauth/token", base_url),
        scoresaber_api_base: format!("{}/api", base_url),
        ..Config::default()
    }
}

/// Create a test app. Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(
    config: Config,
    credentials: Arc<dyn CredentialProvider>,
) -> (Router, Arc<AppState>) {
    let commands = CommandService::new(&config, credentials);
    let state = Arc::new(AppState { config, commands });

    (create_router(state.clone()), state)
}
