//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! process configuration; starting without it is a fatal error.

use std::env;
use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens
    pub jwt_secret: Vec<u8>,
    /// Access token TTL (15 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token TTL (7 days)
    pub refresh_token_ttl: Duration,
}

impl AuthConfig {
    /// Create a config with the given signing secret and default TTLs
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_ttl: Duration::from_secs(15 * 60),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600),
        }
    }

    /// Load from the environment; `JWT_SECRET` is required
    pub fn from_env() -> AuthResult<Self> {
        let secret = env::var("JWT_SECRET")
            .map_err(|_| AuthError::Internal("JWT_SECRET not configured".to_string()))?;
        Ok(Self::new(secret.into_bytes()))
    }

    /// Create config with a random signing secret (for development and tests)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec())
    }

    /// Access token TTL in seconds
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.access_token_ttl.as_secs() as i64
    }

    /// Refresh token TTL as a chrono duration (for expiry timestamps)
    pub fn refresh_token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.refresh_token_ttl.as_secs() as i64)
    }
}
