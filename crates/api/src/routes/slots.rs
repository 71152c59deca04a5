use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/preview", post(handlers::slots::preview_slots))
        .route("/api/slots/remove", post(handlers::slots::remove_slot))
        .route("/api/slots/commit", post(handlers::slots::commit_slots))
}
