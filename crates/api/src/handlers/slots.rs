//! # Slot Batch Handlers
//!
//! Endpoints behind the owner's "generate slots" screen. Preview and removal
//! are stateless: the browser holds the working set and sends it back with
//! each call. Commit forwards the owner's bearer token to the booking backend
//! and submits the working set one slot at a time.
//!
//! ## Commit policy
//!
//! Every slot in the submitted working set is attempted, even after a failure.
//! The response lists the confirmed and rejected entries separately and returns
//! the rejected ones as the new working set. Nothing is rolled back.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;
use venuebook_client::commit;
use venuebook_core::{
    errors::VenueError,
    generate_batch,
    models::{
        batch::{
            CommitBatchRequest, CommitBatchResponse, PreviewResponse, RemoveSlotRequest,
            RemoveSlotResponse,
        },
        slot::{ScheduleConfig, ScheduleDraft},
    },
};

use crate::{
    ApiState,
    middleware::{auth::BearerToken, error_handling::AppError},
};

/// Generates the candidate slots for a form without persisting anything.
///
/// # Endpoint
///
/// ```text
/// POST /api/slots/preview
/// ```
///
/// # Errors
///
/// * `VenueError::ConfigIncomplete` - 422, body lists the missing fields
/// * `VenueError::NoSlotsGenerated` - 422, no slot fits the window
/// * `VenueError::Validation` - 400, duration is below 15 minutes or not a multiple of 15
#[axum::debug_handler]
pub async fn preview_slots(
    Json(draft): Json<ScheduleDraft>,
) -> Result<Json<PreviewResponse>, AppError> {
    let config = ScheduleConfig::try_from(&draft)?;
    config.check_form_constraints()?;

    let slots = generate_batch(&config)?;

    Ok(Json(PreviewResponse {
        count: slots.len(),
        slots,
    }))
}

/// Drops one candidate from a working set. Unknown sequence numbers leave it unchanged.
///
/// ```text
/// POST /api/slots/remove
/// ```
#[axum::debug_handler]
pub async fn remove_slot(
    Json(payload): Json<RemoveSlotRequest>,
) -> Result<Json<RemoveSlotResponse>, AppError> {
    let mut slots = payload.slots;
    let removed = slots.remove(payload.sequence_number);

    Ok(Json(RemoveSlotResponse { removed, slots }))
}

/// Creates every slot of a working set on the booking backend.
///
/// ```text
/// POST /api/slots/commit
/// Authorization: Bearer <owner token>
/// ```
///
/// Responds `200 OK` when every slot was created and `207 Multi-Status` when
/// some were not.
#[axum::debug_handler]
pub async fn commit_slots(
    State(state): State<Arc<ApiState>>,
    BearerToken(credential): BearerToken,
    Json(payload): Json<CommitBatchRequest>,
) -> Result<(StatusCode, Json<CommitBatchResponse>), AppError> {
    if payload.slots.is_empty() {
        return Err(AppError(VenueError::Validation(
            "There are no slots to commit".to_string(),
        )));
    }

    let client = state.client.with_credential(credential);
    let mut remaining = payload.slots;
    info!(count = remaining.len(), "committing slot batch");

    let report = commit(&mut remaining, &client).await;

    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };

    Ok((
        status,
        Json(CommitBatchResponse {
            created: report.created_count(),
            failed: report.failed_count(),
            report,
            remaining,
        }),
    ))
}
