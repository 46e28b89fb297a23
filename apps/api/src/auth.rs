//! Authenticated principal extraction.
//!
//! Authentication itself lives in the upstream gateway, which verifies the
//! bearer token and forwards the principal's id in the `x-user-id` header.
//! Every roadmap/resume handler takes a `CurrentUser` and performs its
//! ownership check against it; the core never re-authenticates.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

/// The authenticated user on whose behalf a request acts.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let id = Uuid::parse_str(raw).map_err(|_| AppError::Unauthorized)?;
        Ok(CurrentUser(id))
    }
}
