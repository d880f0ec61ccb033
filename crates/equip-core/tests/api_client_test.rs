//! HTTP-level tests for ApiClient
//!
//! Each test starts an in-process fake lending API on an ephemeral port and
//! drives the real reqwest client against it.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use equip_core::services::page::RequestsPage;
use equip_core::{
    ApiClient, Error, LendingApi, MemorySessionStore, RequestFormDraft, RequestStatus, Role,
    Session, SubmitOutcome, ViewScope,
};

const VALID_TOKEN: &str = "good-token";

#[derive(Clone, Default)]
struct FakeServer {
    reject_creates: bool,
    posted: Arc<Mutex<Vec<Value>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let ok = value == format!("Bearer {}", VALID_TOKEN);
        self.auth_headers.lock().unwrap().push(value);
        ok
    }
}

async fn equipment_handler(State(server): State<FakeServer>, headers: HeaderMap) -> Response {
    if !server.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "count": 2,
        "next": null,
        "results": [
            {"id": 3, "name": "Microscope", "available_quantity": 5, "category": "lab"},
            {"id": 4, "name": "Tripod", "available_quantity": 2}
        ]
    }))
    .into_response()
}

async fn my_requests_handler(State(server): State<FakeServer>, headers: HeaderMap) -> Response {
    if !server.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let posted = server.posted.lock().unwrap().clone();
    let requests: Vec<Value> = posted
        .iter()
        .enumerate()
        .map(|(i, body)| {
            json!({
                "id": i + 1,
                "equipment": {"id": body["equipment"], "name": "Microscope"},
                "quantity": body["quantity"],
                "purpose": body["purpose"],
                "status": "pending",
                "borrow_from": body["borrow_from"],
                "borrow_until": body["borrow_until"],
                "created_at": "2025-05-30T12:00:00Z"
            })
        })
        .collect();
    Json(Value::Array(requests)).into_response()
}

async fn create_handler(
    State(server): State<FakeServer>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !server.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if server.reject_creates {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"non_field_errors": ["Equipment not available for these dates"]})),
        )
            .into_response();
    }
    server.posted.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn start(server: FakeServer) -> String {
    let app = Router::new()
        .route("/api/equipment/", get(equipment_handler))
        .route("/api/requests/my_requests/", get(my_requests_handler))
        .route("/api/requests/", post(create_handler))
        .with_state(server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn lab_demo_draft() -> RequestFormDraft {
    RequestFormDraft {
        equipment: "3".to_string(),
        quantity: 2,
        purpose: "Lab demo".to_string(),
        borrow_from: "2025-06-01".to_string(),
        borrow_until: "2025-06-05".to_string(),
    }
}

#[tokio::test]
async fn test_equipment_wrapped_envelope_and_bearer_header() {
    let server = FakeServer::default();
    let url = start(server.clone()).await;
    let client = ApiClient::new(&url).unwrap();

    let items = client.list_available_equipment(VALID_TOKEN).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Microscope");
    assert_eq!(items[1].available_quantity, 2);
    assert_eq!(
        server.auth_headers.lock().unwrap().as_slice(),
        &[format!("Bearer {}", VALID_TOKEN)]
    );
}

#[tokio::test]
async fn test_my_requests_bare_array() {
    let server = FakeServer::default();
    server.posted.lock().unwrap().push(json!({
        "equipment": 3, "quantity": 1, "purpose": "Science fair",
        "borrow_from": "2025-06-01", "borrow_until": "2025-06-02"
    }));
    let url = start(server).await;
    let client = ApiClient::new(&url).unwrap();

    let requests = client.list_my_requests(VALID_TOKEN).await.unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, RequestStatus::Pending);
    assert_eq!(requests[0].purpose, "Science fair");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let url = start(FakeServer::default()).await;
    let client = ApiClient::new(&url).unwrap();

    let err = client.list_my_requests("stale").await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { status: 401 }));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.list_available_equipment(VALID_TOKEN).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_submit_posts_coerced_body_and_refetches() {
    let server = FakeServer::default();
    let url = start(server.clone()).await;
    let client = ApiClient::new(&url).unwrap();
    let store = MemorySessionStore::with_session(Session::new(VALID_TOKEN, Role::Student));

    let mut page = RequestsPage::open(&client, &store, ViewScope::new()).unwrap();
    page.mount().await;
    assert!(page.requests().is_empty());

    page.open_dialog();
    *page.draft_mut() = lab_demo_draft();
    let outcome = page.submit().await;

    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(
        server.posted.lock().unwrap()[0],
        json!({
            "equipment": 3,
            "quantity": 2,
            "purpose": "Lab demo",
            "borrow_from": "2025-06-01",
            "borrow_until": "2025-06-05"
        })
    );
    assert_eq!(page.requests().len(), 1);
    assert_eq!(page.cards()[0].badge.label, "Pending");
}

#[tokio::test]
async fn test_rejected_submit_shows_generic_banner() {
    let server = FakeServer {
        reject_creates: true,
        ..FakeServer::default()
    };
    let url = start(server).await;
    let client = ApiClient::new(&url).unwrap();
    let store = MemorySessionStore::with_session(Session::new(VALID_TOKEN, Role::Student));

    let mut page = RequestsPage::open(&client, &store, ViewScope::new()).unwrap();
    page.mount().await;
    page.open_dialog();
    *page.draft_mut() = lab_demo_draft();

    let outcome = page.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed("Failed to create request".to_string()));
    assert!(page.is_dialog_open());
    assert_eq!(page.draft(), &lab_demo_draft());
    assert_eq!(page.error(), Some("Failed to create request"));
}
