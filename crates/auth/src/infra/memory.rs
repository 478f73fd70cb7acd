//! In-Memory Repository Implementation
//!
//! Backing store for use-case tests and local experiments. Mirrors the
//! store-level semantics the use cases rely on: exact-email lookup and
//! atomic consume of refresh tokens.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::{member::Member, refresh_token::RefreshToken};
use crate::domain::repository::{MemberRepository, RefreshTokenRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    members: Arc<Mutex<Vec<Member>>>,
    tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored members
    pub fn member_count(&self) -> usize {
        self.members.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Number of stored refresh tokens
    pub fn token_count(&self) -> usize {
        self.tokens.lock().map(|t| t.len()).unwrap_or(0)
    }

    fn lock_members(&self) -> Result<MutexGuard<'_, Vec<Member>>, AuthError> {
        self.members
            .lock()
            .map_err(|_| AuthError::Internal("Member store lock poisoned".to_string()))
    }

    fn lock_tokens(&self) -> Result<MutexGuard<'_, Vec<RefreshToken>>, AuthError> {
        self.tokens
            .lock()
            .map_err(|_| AuthError::Internal("Token store lock poisoned".to_string()))
    }
}

impl MemberRepository for MemoryAuthRepository {
    async fn create(&self, member: &Member) -> AuthResult<()> {
        let mut members = self.lock_members()?;

        // The unique-constraint backstop the real store provides
        if members.iter().any(|m| m.email == member.email) {
            return Err(AuthError::EmailTaken);
        }

        members.push(member.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Member>> {
        let members = self.lock_members()?;
        Ok(members.iter().find(|m| &m.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let members = self.lock_members()?;
        Ok(members.iter().any(|m| &m.email == email))
    }
}

impl RefreshTokenRepository for MemoryAuthRepository {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        let mut tokens = self.lock_tokens()?;
        tokens.push(token.clone());
        Ok(())
    }

    async fn consume(&self, token: &str) -> AuthResult<Option<RefreshToken>> {
        let mut tokens = self.lock_tokens()?;

        // Remove-and-return under one lock, like DELETE ... RETURNING
        match tokens.iter().position(|t| t.token == token) {
            Some(idx) => Ok(Some(tokens.remove(idx))),
            None => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> AuthResult<bool> {
        let mut tokens = self.lock_tokens()?;
        let before = tokens.len();
        tokens.retain(|t| t.token != token);
        Ok(tokens.len() < before)
    }
}
