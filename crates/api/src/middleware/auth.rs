//! # Authentication Module
//!
//! The service does not check credentials itself; it forwards the owner's
//! bearer token to the booking backend, which accepts or rejects it per slot.
//! [`BearerToken`] pulls that token out of the request so handlers can bind
//! it to an [`venuebook_client::ApiClient`].

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use venuebook_client::Credential;
use venuebook_core::errors::VenueError;

use super::error_handling::AppError;

/// The credential from an `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Credential);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                AppError(VenueError::Authentication(
                    "Missing Authorization header".to_string(),
                ))
            })?
            .to_str()
            .map_err(|_| {
                AppError(VenueError::Authentication(
                    "Malformed Authorization header".to_string(),
                ))
            })?;

        parse_bearer(header)
            .map(|token| BearerToken(Credential::bearer(token)))
            .ok_or_else(|| {
                AppError(VenueError::Authentication(
                    "Authorization header must carry a bearer token".to_string(),
                ))
            })
    }
}

/// Token from a `Bearer <token>` header value; the scheme is case-insensitive.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
