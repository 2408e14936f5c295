//! End-to-end operation execution tests.
//!
//! These tests drive the full pipeline (resolve, build, invoke, validate,
//! decode) against in-memory stub transports that record what reached them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use http::{HeaderMap, Method, StatusCode};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use pharos_client::{
    Client, ConfigRegistry, DecodeKind, DraftRequest, Empty, Json, JsonProfile, Operation,
    PharosError, Timestamp, Transport, TransportError, TransportResponse,
};

/// Stub transport replying with a canned response and counting invocations.
struct StubTransport {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    hits: AtomicUsize,
    captured: Mutex<Option<DraftRequest>>,
}

impl StubTransport {
    fn replying(status: StatusCode, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("x-served-by", "stub".parse().unwrap());
        Self {
            status,
            headers,
            body: Bytes::from(body.to_string()),
            hits: AtomicUsize::new(0),
            captured: Mutex::new(None),
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn captured(&self) -> DraftRequest {
        self.captured.lock().clone().expect("no request captured")
    }
}

impl Transport for &StubTransport {
    async fn send(&self, request: DraftRequest) -> Result<TransportResponse, TransportError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.captured.lock() = Some(request);
        Ok(TransportResponse {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        })
    }
}

/// Stub transport that always fails at the network layer.
struct FailingTransport;

impl Transport for FailingTransport {
    async fn send(&self, _request: DraftRequest) -> Result<TransportResponse, TransportError> {
        Err(TransportError::new("connection reset"))
    }
}

fn registry_with(key: &str, base: &str) -> Arc<ConfigRegistry> {
    let registry = Arc::new(ConfigRegistry::new());
    registry.register(key, base.parse().unwrap());
    registry
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
struct CreateReminder {
    name: String,
    #[serde(rename = "dueDate")]
    due_date: Timestamp,
}

#[tokio::test]
async fn test_successful_get_returns_typed_value() {
    let stub = StubTransport::replying(StatusCode::OK, r#"{"success": true}"#);
    let client = Client::new(registry_with("svc", "https://api.example.com"), &stub);

    let operation: Operation<Empty, HealthResponse> = Operation::get("svc", "/users");
    let value = client.execute(&operation).await.unwrap();

    assert!(value.success);
    assert_eq!(stub.hits(), 1);
    let sent = stub.captured();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(sent.url.as_str(), "https://api.example.com/users");
    assert!(sent.body.is_none());
}

#[tokio::test]
async fn test_non_success_status_surfaces_http_error() {
    let stub = StubTransport::replying(StatusCode::NOT_FOUND, "");
    let client = Client::new(registry_with("svc", "https://api.example.com"), &stub);

    let operation: Operation<Empty, HealthResponse> = Operation::get("svc", "/users");
    let err = client.execute(&operation).await.unwrap_err();

    match err {
        PharosError::Http { status, headers } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(headers.get("x-served-by").unwrap(), "stub");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unregistered_key_never_invokes_transport() {
    let stub = StubTransport::replying(StatusCode::OK, "{}");
    let client = Client::new(Arc::new(ConfigRegistry::new()), &stub);

    let operation: Operation<Empty, HealthResponse> = Operation::get("missing", "/users");
    let err = client.execute(&operation).await.unwrap_err();

    match err {
        PharosError::ConfigurationNotFound { key } => assert_eq!(key, "missing"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(stub.hits(), 0);
}

#[tokio::test]
async fn test_transport_failure_is_classified() {
    let client = Client::new(registry_with("svc", "https://api.example.com"), FailingTransport);

    let operation: Operation<Empty, HealthResponse> = Operation::get("svc", "/users");
    let err = client.execute(&operation).await.unwrap_err();

    assert_eq!(err.category(), "transport");
}

#[tokio::test]
async fn test_portable_body_snake_cases_keys_and_dates() {
    let stub = StubTransport::replying(StatusCode::OK, r#"{"success": true}"#);
    let client = Client::new(registry_with("svc", "https://api.example.com"), &stub);

    let due = Timestamp::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let payload = Json(CreateReminder {
        name: "a".to_string(),
        due_date: due,
    });
    let operation: Operation<_, HealthResponse> = Operation::builder("svc", payload)
        .method(Method::POST)
        .path("/reminders")
        .profile(JsonProfile::Portable)
        .build();

    client.execute(&operation).await.unwrap();

    let sent = stub.captured();
    assert_eq!(sent.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "a");
    assert_eq!(body["due_date"], "2024-01-01");
    assert!(body.get("dueDate").is_none());
}

#[tokio::test]
async fn test_last_registration_wins_end_to_end() {
    let stub = StubTransport::replying(StatusCode::OK, r#"{"success": true}"#);
    let registry = registry_with("svc", "https://old.example.com");
    registry.register("svc", "https://new.example.com".parse().unwrap());
    let client = Client::new(registry, &stub);

    let operation: Operation<Empty, HealthResponse> = Operation::get("svc", "/users");
    client.execute(&operation).await.unwrap();

    assert_eq!(stub.captured().url.as_str(), "https://new.example.com/users");
}

#[tokio::test]
async fn test_decode_failure_carries_diagnostics() {
    let stub = StubTransport::replying(StatusCode::OK, r#"{"outcome": true}"#);
    let client = Client::new(registry_with("svc", "https://api.example.com"), &stub);

    let operation: Operation<Empty, HealthResponse> = Operation::get("svc", "/users");
    let err = client.execute(&operation).await.unwrap_err();

    match err {
        PharosError::Decoding(decode) => {
            assert_eq!(decode.kind(), DecodeKind::MissingField);
            assert!(decode.description().contains("success"));
            assert_eq!(decode.snippet(), Some(r#"{"outcome": true}"#));
        }
        other => panic!("unexpected error: {other}"),
    }
}
