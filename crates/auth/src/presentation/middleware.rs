//! Auth Middleware
//!
//! Middleware for requiring a bearer access token on protected routes.
//! Verification is stateless: the JWT signature and expiry are checked
//! against process configuration, no store access involved.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::extract::CurrentMember;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::error::AuthError;

/// Middleware that requires a valid `Authorization: Bearer <token>` header.
///
/// On success the authenticated member id is injected into request
/// extensions as [`CurrentMember`]. Missing/malformed header, bad
/// signature, and expired token all yield the same 401.
pub async fn require_auth(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AuthError::InvalidAccessToken.into_response())?;

    let member_id =
        token::verify_access_token(token, &config).map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(CurrentMember(member_id));

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
