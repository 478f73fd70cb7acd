//! Member Entity
//!
//! An account holder. Immutable once created; there is no update path.

use chrono::{DateTime, Utc};
use kernel::id::MemberId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// Member entity
#[derive(Debug, Clone)]
pub struct Member {
    /// Member ID (UUID v4)
    pub member_id: MemberId,
    /// Email address, unique, stored case-sensitively
    pub email: Email,
    /// Argon2id password hash, never serialized
    pub password_hash: HashedPassword,
    /// Display name
    pub nickname: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member
    pub fn new(email: Email, password_hash: HashedPassword, nickname: String) -> Self {
        Self {
            member_id: MemberId::new(),
            email,
            password_hash,
            nickname,
            created_at: Utc::now(),
        }
    }

    /// Rehydrate from persisted fields
    pub fn from_db(
        member_id: MemberId,
        email: Email,
        password_hash: HashedPassword,
        nickname: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            member_id,
            email,
            password_hash,
            nickname,
            created_at,
        }
    }
}
