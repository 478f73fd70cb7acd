//! Sign In Use Case
//!
//! Verifies credentials and issues an access/refresh token pair.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::{self, TokenPair};
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::{MemberRepository, RefreshTokenRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<M, R>
where
    M: MemberRepository,
    R: RefreshTokenRepository,
{
    member_repo: Arc<M>,
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<M, R> SignInUseCase<M, R>
where
    M: MemberRepository,
    R: RefreshTokenRepository,
{
    pub fn new(member_repo: Arc<M>, token_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            member_repo,
            token_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<TokenPair> {
        // A malformed email cannot match any member, so it flows into the
        // same InvalidCredentials path as an unknown one.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let member = self
            .member_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Policy is not re-applied at login; older accounts may predate it
        let password = ClearTextPassword::new_unchecked(input.password);

        let password_valid = member.password_hash.verify(&password)?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = token::issue_access_token(member.member_id, &self.config)?;

        let refresh = RefreshToken::issue(member.member_id, self.config.refresh_token_ttl_chrono());
        self.token_repo.create(&refresh).await?;

        tracing::info!(
            member_id = %member.member_id,
            "Member signed in"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: refresh.token,
        })
    }
}
