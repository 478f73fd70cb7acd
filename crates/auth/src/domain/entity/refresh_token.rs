//! Refresh Token Entity
//!
//! An opaque, single-use credential exchanged for a new token pair.
//! Created on login and on every successful refresh; deleted on refresh
//! (the presented one), on logout, or lazily when presented after expiry.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{MemberId, RefreshTokenId};

/// Byte length of the random token material (43 base64url chars)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Refresh token entity
#[derive(Debug, Clone)]
pub struct RefreshToken {
    /// Token ID (UUID v4)
    pub token_id: RefreshTokenId,
    /// Owning member
    pub member_id: MemberId,
    /// Opaque token string, unique
    pub token: String,
    /// Expiry timestamp
    pub expires_at: DateTime<Utc>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Issue a new token for a member with a fresh random value
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn issue(member_id: MemberId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            token_id: RefreshTokenId::new(),
            member_id,
            token: platform::crypto::opaque_token(REFRESH_TOKEN_BYTES),
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// Rehydrate from persisted fields
    pub fn from_db(
        token_id: RefreshTokenId,
        member_id: MemberId,
        token: String,
        expires_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token_id,
            member_id,
            token,
            expires_at,
            created_at,
        }
    }

    /// Check whether the token has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
