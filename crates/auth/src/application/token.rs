//! Access Token Issuance and Verification
//!
//! Short-lived HS256 JWTs carrying the member id as the subject claim.
//! Access tokens are never persisted; only refresh tokens are.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::MemberId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Access token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject - member id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl AccessTokenClaims {
    /// New claims for a member, valid for `ttl_secs` from now
    pub fn new(member_id: MemberId, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: member_id.to_string(),
            iat: now,
            exp: now + ttl_secs,
        }
    }
}

/// Access token + refresh token pair, as returned by login and refresh
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Sign a new access token for a member
pub fn issue_access_token(member_id: MemberId, config: &AuthConfig) -> AuthResult<String> {
    let claims = AccessTokenClaims::new(member_id, config.access_token_ttl_secs());

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&config.jwt_secret),
    )
    .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
}

/// Verify an access token and extract the member id
///
/// Any defect - bad signature, expired, malformed, non-UUID subject -
/// collapses into [`AuthError::InvalidAccessToken`] so the response is
/// a uniform 401.
pub fn verify_access_token(token: &str, config: &AuthConfig) -> AuthResult<MemberId> {
    let data = decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(&config.jwt_secret),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidAccessToken)?;

    let uuid = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidAccessToken)?;

    Ok(MemberId::from_uuid(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = AuthConfig::with_random_secret();
        let member_id = MemberId::new();

        let token = issue_access_token(member_id, &config).unwrap();
        let verified = verify_access_token(&token, &config).unwrap();

        assert_eq!(verified, member_id);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let config = AuthConfig::with_random_secret();
        let other = AuthConfig::with_random_secret();

        let token = issue_access_token(MemberId::new(), &config).unwrap();
        assert!(matches!(
            verify_access_token(&token, &other),
            Err(AuthError::InvalidAccessToken)
        ));
    }

    #[test]
    fn test_rejects_expired_token() {
        let config = AuthConfig::with_random_secret();

        // Expired an hour ago, well past the default validation leeway
        let claims = AccessTokenClaims {
            sub: MemberId::new().to_string(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.jwt_secret),
        )
        .unwrap();

        assert!(matches!(
            verify_access_token(&token, &config),
            Err(AuthError::InvalidAccessToken)
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        let config = AuthConfig::with_random_secret();
        assert!(matches!(
            verify_access_token("not.a.jwt", &config),
            Err(AuthError::InvalidAccessToken)
        ));
    }

    #[test]
    fn test_rejects_non_uuid_subject() {
        let config = AuthConfig::with_random_secret();

        let claims = AccessTokenClaims {
            sub: "not-a-uuid".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 900,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.jwt_secret),
        )
        .unwrap();

        assert!(matches!(
            verify_access_token(&token, &config),
            Err(AuthError::InvalidAccessToken)
        ));
    }
}
