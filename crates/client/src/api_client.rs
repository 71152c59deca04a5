//! # Slot Backend Client
//!
//! HTTP client for the booking backend's slot endpoints. The credential is
//! bound to the client when it is built and travels with it, so every caller
//! that needs backend access receives a client instead of looking up a
//! session on its own.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{WrapErr, eyre};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;
use venuebook_core::{
    errors::{VenueError, VenueResult},
    models::slot::{CreateSlotRequest, SlotRecord},
};

use crate::config::ClientConfig;

/// Bearer token for an authenticated owner.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where generated slots are sent to be persisted.
#[async_trait]
pub trait SlotEndpoint: Send + Sync {
    /// Creates one slot and returns the stored record.
    async fn create_slot(&self, request: &CreateSlotRequest) -> VenueResult<SlotRecord>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<Credential>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, credential: Option<Credential>) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            credential,
        })
    }

    /// Same connection, different owner.
    pub fn with_credential(&self, credential: Credential) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credential: Some(credential),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// `POST /api/owner/slots`
    pub async fn create_slot(&self, request: &CreateSlotRequest) -> VenueResult<SlotRecord> {
        debug!(
            ground_id = %request.ground_id,
            slot_date = %request.slot_date,
            start_time = %request.start_time,
            "creating slot"
        );

        let response = self
            .authorized(self.http.post(self.url("/api/owner/slots")))
            .json(request)
            .send()
            .await
            .wrap_err("Failed to reach slot backend")?;

        read_json(response).await
    }

    /// `GET /api/grounds/{ground_id}/slots`, optionally limited to one date.
    pub async fn ground_slots(
        &self,
        ground_id: &str,
        slot_date: Option<NaiveDate>,
    ) -> VenueResult<Vec<SlotRecord>> {
        let path = format!("/api/grounds/{}/slots", urlencoding::encode(ground_id));
        let mut builder = self.authorized(self.http.get(self.url(&path)));
        if let Some(date) = slot_date {
            builder = builder.query(&[("slot_date", date.to_string())]);
        }

        let response = builder
            .send()
            .await
            .wrap_err("Failed to reach slot backend")?;

        read_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(credential) => builder.bearer_auth(credential.token()),
            None => builder,
        }
    }
}

#[async_trait]
impl SlotEndpoint for ApiClient {
    async fn create_slot(&self, request: &CreateSlotRequest) -> VenueResult<SlotRecord> {
        ApiClient::create_slot(self, request).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    error: Option<String>,
}

async fn read_json<T: DeserializeOwned>(response: Response) -> VenueResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .json::<T>()
            .await
            .wrap_err("Slot backend returned an unreadable body")?;
        return Ok(body);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, error_detail(status, &body)))
}

/// Pulls the human readable message out of an error body: `detail` as sent by
/// the booking backend, `error` as sent by this workspace's own service, or the
/// raw text.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match (parsed.detail, parsed.error) {
            (Some(serde_json::Value::String(detail)), _) => return detail,
            (Some(detail), _) => return detail.to_string(),
            (None, Some(error)) => return error,
            (None, None) => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Maps a non-success backend status onto the error taxonomy.
pub fn status_error(status: StatusCode, detail: String) -> VenueError {
    match status {
        StatusCode::UNAUTHORIZED => VenueError::Authentication(detail),
        StatusCode::FORBIDDEN => VenueError::Authorization(detail),
        StatusCode::NOT_FOUND => VenueError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            VenueError::Validation(detail)
        }
        other => VenueError::Upstream(eyre!("Slot backend responded {}: {}", other, detail)),
    }
}
