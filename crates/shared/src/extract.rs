//! Request Extractors
//!
//! The authenticated caller, as injected into request extensions by the
//! bearer-auth middleware. Handlers on protected routes take this as an
//! argument; a request that skipped the middleware is rejected with 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::app_error::AppError;
use crate::id::MemberId;

/// The member id of the authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct CurrentMember(pub MemberId);

impl CurrentMember {
    /// Get the member id
    pub fn member_id(&self) -> MemberId {
        self.0
    }
}

impl<S> FromRequestParts<S> for CurrentMember
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentMember>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}
