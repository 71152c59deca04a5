use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use venuebook_core::models::batch::{CommitBatchResponse, PreviewResponse, RemoveSlotResponse};

use crate::test_utils::{OWNER_TOKEN, form, offline_server, spawn_backend, test_server};

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header")
}

#[tokio::test]
async fn test_preview_full_day() {
    let server = offline_server();

    let response = server
        .post("/api/slots/preview")
        .json(&form("06:00", "22:00", 60))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let preview = response.json::<PreviewResponse>();
    assert_eq!(preview.count, 16);
    let slots = preview.slots.as_slice();
    assert_eq!(slots[0].label(), "06:00-07:00");
    assert_eq!(slots[15].label(), "21:00-22:00");
    assert_eq!(slots[15].sequence_number, 16);
}

#[tokio::test]
async fn test_preview_wire_format() {
    let server = offline_server();

    let response = server
        .post("/api/slots/preview")
        .json(&form("06:00", "07:30", 60))
        .await;

    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({
            "count": 1,
            "slots": [{
                "sequence_number": 1,
                "ground_id": "ground-1",
                "date": "2026-10-21",
                "start_time": "06:00",
                "end_time": "07:00",
                "duration_minutes": 60,
                "price": 700
            }]
        })
    );
}

#[tokio::test]
async fn test_preview_incomplete_form() {
    let server = offline_server();

    let response = server
        .post("/api/slots/preview")
        .json(&json!({"ground_id": "ground-1", "date": "2026-10-21", "window_start": "06:00"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "config_incomplete");
    assert_eq!(
        body["missing"],
        json!(["window_end", "duration_minutes", "price_per_slot"])
    );
}

#[tokio::test]
async fn test_preview_empty_window() {
    let server = offline_server();

    let response = server
        .post("/api/slots/preview")
        .json(&form("09:00", "09:00", 30))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "no_slots_generated");
    assert_eq!(body["error"], "No slots can be generated with these settings");
}

#[rstest]
#[case(0)]
#[case(10)]
#[case(20)]
#[case(50)]
#[tokio::test]
async fn test_preview_rejects_off_step_durations(#[case] duration_minutes: u32) {
    let server = offline_server();

    let response = server
        .post("/api/slots/preview")
        .json(&form("06:00", "22:00", duration_minutes))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_keeps_sequence_numbers() {
    let server = offline_server();
    let preview = server
        .post("/api/slots/preview")
        .json(&form("10:00", "15:00", 60))
        .await
        .json::<PreviewResponse>();

    let response = server
        .post("/api/slots/remove")
        .json(&json!({"slots": preview.slots, "sequence_number": 2}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let removed = response.json::<RemoveSlotResponse>();
    assert!(removed.removed);
    assert_eq!(removed.slots.sequence_numbers(), vec![1, 3, 4, 5]);

    let again = server
        .post("/api/slots/remove")
        .json(&json!({"slots": removed.slots, "sequence_number": 2}))
        .await
        .json::<RemoveSlotResponse>();
    assert!(!again.removed);
    assert_eq!(again.slots.len(), 4);
}

#[tokio::test]
async fn test_commit_requires_bearer_token() {
    let (backend_url, received) = spawn_backend().await;
    let server = test_server(&backend_url);
    let preview = server
        .post("/api/slots/preview")
        .json(&form("10:00", "12:00", 60))
        .await
        .json::<PreviewResponse>();

    let response = server
        .post("/api/slots/commit")
        .json(&json!({"slots": preview.slots}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(received.lock().expect("backend lock").is_empty());
}

#[tokio::test]
async fn test_commit_all_created() {
    let (backend_url, received) = spawn_backend().await;
    let server = test_server(&backend_url);
    let preview = server
        .post("/api/slots/preview")
        .json(&form("10:00", "13:00", 60))
        .await
        .json::<PreviewResponse>();

    let response = server
        .post("/api/slots/commit")
        .add_header(AUTHORIZATION, bearer(OWNER_TOKEN))
        .json(&json!({"slots": preview.slots}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let committed = response.json::<CommitBatchResponse>();
    assert_eq!(committed.created, 3);
    assert_eq!(committed.failed, 0);
    assert!(committed.remaining.is_empty());
    assert_eq!(committed.report.created[0].record.id, "slot-10:00");
    assert_eq!(received.lock().expect("backend lock").len(), 3);
}

#[tokio::test]
async fn test_commit_partial_keeps_rejected_slot() {
    let (backend_url, received) = spawn_backend().await;
    let server = test_server(&backend_url);
    let preview = server
        .post("/api/slots/preview")
        .json(&form("06:00", "11:00", 60))
        .await
        .json::<PreviewResponse>();

    let response = server
        .post("/api/slots/commit")
        .add_header(AUTHORIZATION, bearer(OWNER_TOKEN))
        .json(&json!({"slots": preview.slots}))
        .await;

    assert_eq!(response.status_code(), StatusCode::MULTI_STATUS);
    let committed = response.json::<CommitBatchResponse>();
    assert_eq!(committed.created, 4);
    assert_eq!(committed.failed, 1);
    assert_eq!(committed.report.created_sequence_numbers(), vec![1, 2, 4, 5]);
    assert_eq!(committed.remaining.sequence_numbers(), vec![3]);
    assert!(
        committed.report.failed[0]
            .reason
            .contains("Slot overlaps an existing slot")
    );
    assert_eq!(received.lock().expect("backend lock").len(), 5);
}

#[tokio::test]
async fn test_commit_with_rejected_token_fails_every_slot() {
    let (backend_url, _received) = spawn_backend().await;
    let server = test_server(&backend_url);
    let preview = server
        .post("/api/slots/preview")
        .json(&form("10:00", "12:00", 60))
        .await
        .json::<PreviewResponse>();

    let response = server
        .post("/api/slots/commit")
        .add_header(AUTHORIZATION, bearer("someone-else"))
        .json(&json!({"slots": preview.slots}))
        .await;

    assert_eq!(response.status_code(), StatusCode::MULTI_STATUS);
    let committed = response.json::<CommitBatchResponse>();
    assert_eq!(committed.created, 0);
    assert_eq!(committed.remaining.sequence_numbers(), vec![1, 2]);
}

#[tokio::test]
async fn test_commit_empty_batch_is_rejected() {
    let server = offline_server();

    let response = server
        .post("/api/slots/commit")
        .add_header(AUTHORIZATION, bearer(OWNER_TOKEN))
        .json(&json!({"slots": []}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = offline_server();

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "venuebook-api");

    let version = server.get("/version").await.json::<Value>();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
