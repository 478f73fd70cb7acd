//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infrastructure
//! layer; the use cases are tested against the in-memory implementation.

use crate::domain::entity::{member::Member, refresh_token::RefreshToken};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Member (credential store) repository trait
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// Persist a new member. The store's unique constraint on email is the
    /// correctness backstop against concurrent duplicate signups.
    async fn create(&self, member: &Member) -> AuthResult<()>;

    /// Find a member by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Member>>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Refresh token store repository trait
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Persist a new refresh token
    async fn create(&self, token: &RefreshToken) -> AuthResult<()>;

    /// Atomically delete the row for `token` and return it.
    ///
    /// This is the single-use primitive: under concurrent refresh calls with
    /// the same token exactly one caller gets `Some`, the rest get `None`.
    async fn consume(&self, token: &str) -> AuthResult<Option<RefreshToken>>;

    /// Delete the row for `token` if present; returns whether a row existed
    async fn delete(&self, token: &str) -> AuthResult<bool>;
}
