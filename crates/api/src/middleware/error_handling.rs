//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.
//!
//! The two generation outcomes get distinct bodies: an incomplete form lists
//! the fields still missing, while a complete form that yields no slot only
//! carries the message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use venuebook_core::errors::VenueError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use venuebook_api::middleware::error_handling::AppError;
/// use venuebook_core::{generate, models::slot::ScheduleDraft};
///
/// async fn handler(Json(draft): Json<ScheduleDraft>) -> Result<Json<usize>, AppError> {
///     let slots = generate(&draft)?;
///     Ok(Json(slots.len()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub VenueError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            VenueError::ConfigIncomplete(_) => StatusCode::UNPROCESSABLE_ENTITY,
            VenueError::NoSlotsGenerated => StatusCode::UNPROCESSABLE_ENTITY,
            VenueError::CommitItemFailed { .. } => StatusCode::BAD_GATEWAY,
            VenueError::NotFound(_) => StatusCode::NOT_FOUND,
            VenueError::Validation(_) => StatusCode::BAD_REQUEST,
            VenueError::Authentication(_) => StatusCode::UNAUTHORIZED,
            VenueError::Authorization(_) => StatusCode::FORBIDDEN,
            VenueError::Upstream(_) => StatusCode::BAD_GATEWAY,
            VenueError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        let body = match &self.0 {
            VenueError::ConfigIncomplete(missing) => json!({
                "error": message,
                "kind": "config_incomplete",
                "missing": missing,
            }),
            VenueError::NoSlotsGenerated => json!({
                "error": message,
                "kind": "no_slots_generated",
            }),
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<VenueError> for AppError {
    fn from(err: VenueError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(VenueError::Upstream(err))
    }
}

/// Maps a VenueError to an HTTP response
pub fn map_error(err: VenueError) -> Response {
    AppError(err).into_response()
}
