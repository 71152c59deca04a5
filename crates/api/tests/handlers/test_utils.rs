use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use serde_json::{Value, json};
use venuebook_api::{ApiState, router};
use venuebook_client::{ApiClient, ClientConfig};

pub const OWNER_TOKEN: &str = "owner-token";

/// Start time the stub backend rejects as an overlap.
pub const TAKEN_START: &str = "08:00";

/// Bodies received by the stub backend, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Stand-in for the booking backend's slot creation endpoint.
pub async fn spawn_backend() -> (String, Received) {
    let received: Received = Arc::default();
    let recorder = Arc::clone(&received);

    let app = Router::new().route(
        "/api/owner/slots",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            async move { create_slot(recorder, headers, body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("stub backend stopped");
    });

    (format!("http://{}", addr), received)
}

fn create_slot(received: Received, headers: HeaderMap, body: Value) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", OWNER_TOKEN))
        .unwrap_or(false);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid token"})),
        )
            .into_response();
    }

    received.lock().expect("backend lock").push(body.clone());

    if body["start_time"] == TAKEN_START {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Slot overlaps an existing slot"})),
        )
            .into_response();
    }

    let id = format!("slot-{}", body["start_time"].as_str().unwrap_or_default());
    let mut record = body;
    record["id"] = json!(id);
    record["is_booked"] = json!(false);
    Json(record).into_response()
}

pub fn test_server(backend_url: &str) -> TestServer {
    let client = ApiClient::new(&ClientConfig::new(backend_url), None).expect("client builds");
    let state = Arc::new(ApiState { client });

    TestServer::new(router(state)).expect("test server starts")
}

/// Server whose backend is never reached.
pub fn offline_server() -> TestServer {
    test_server("http://127.0.0.1:9")
}

pub fn form(start: &str, end: &str, duration_minutes: u32) -> Value {
    json!({
        "ground_id": "ground-1",
        "date": "2026-10-21",
        "window_start": start,
        "window_end": end,
        "duration_minutes": duration_minutes,
        "price_per_slot": 700
    })
}
