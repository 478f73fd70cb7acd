//! Refresh Use Case
//!
//! Exchanges a valid refresh token for a new token pair, consuming the
//! presented one (rotation).

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::token::{self, TokenPair};
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh use case
pub struct RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { token_repo, config }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        // Atomic delete-and-return: of two racing calls with the same token,
        // exactly one gets the row. The loser, a replay, and a token that
        // never existed all observe the same absence.
        let consumed = self
            .token_repo
            .consume(refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        if consumed.is_expired(Utc::now()) {
            // Already deleted by consume() - this is the lazy purge
            tracing::debug!(
                member_id = %consumed.member_id,
                "Purged expired refresh token"
            );
            return Err(AuthError::InvalidRefreshToken);
        }

        let access_token = token::issue_access_token(consumed.member_id, &self.config)?;

        let replacement =
            RefreshToken::issue(consumed.member_id, self.config.refresh_token_ttl_chrono());
        self.token_repo.create(&replacement).await?;

        tracing::info!(
            member_id = %consumed.member_id,
            "Refresh token rotated"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: replacement.token,
        })
    }
}
