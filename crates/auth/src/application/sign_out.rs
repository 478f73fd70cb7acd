//! Sign Out Use Case
//!
//! Invalidates a refresh token. Idempotent: an absent token is not an error.

use std::sync::Arc;

use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
}

impl<R> SignOutUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>) -> Self {
        Self { token_repo }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        let existed = self.token_repo.delete(refresh_token).await?;

        if existed {
            tracing::info!("Member signed out");
        } else {
            tracing::debug!("Sign out with unknown refresh token");
        }

        Ok(())
    }
}
