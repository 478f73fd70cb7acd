//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{MemberId, RefreshTokenId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{member::Member, refresh_token::RefreshToken};
use crate::domain::repository::{MemberRepository, RefreshTokenRepository};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Member Repository Implementation
// ============================================================================

impl MemberRepository for PgAuthRepository {
    async fn create(&self, member: &Member) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO member (
                member_id,
                email,
                password_hash,
                nickname,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member.member_id.as_uuid())
        .bind(member.email.as_str())
        .bind(member.password_hash.as_str())
        .bind(&member.nickname)
        .bind(member.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT
                member_id,
                email,
                password_hash,
                nickname,
                created_at
            FROM member
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MemberRow::into_member))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM member WHERE email = $1)
            "#,
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Refresh Token Repository Implementation
// ============================================================================

impl RefreshTokenRepository for PgAuthRepository {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_token (
                token_id,
                member_id,
                token,
                expires_at,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.token_id.as_uuid())
        .bind(token.member_id.as_uuid())
        .bind(&token.token)
        .bind(token.expires_at)
        .bind(token.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn consume(&self, token: &str) -> AuthResult<Option<RefreshToken>> {
        // Single statement, so two racing refreshes with the same token
        // cannot both see the row.
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            DELETE FROM refresh_token
            WHERE token = $1
            RETURNING
                token_id,
                member_id,
                token,
                expires_at,
                created_at
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RefreshTokenRow::into_refresh_token))
    }

    async fn delete(&self, token: &str) -> AuthResult<bool> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM refresh_token WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct MemberRow {
    member_id: Uuid,
    email: String,
    password_hash: String,
    nickname: String,
    created_at: DateTime<Utc>,
}

impl MemberRow {
    fn into_member(self) -> Member {
        Member::from_db(
            MemberId::from_uuid(self.member_id),
            Email::from_db(self.email),
            HashedPassword::from_hash(self.password_hash),
            self.nickname,
            self.created_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct RefreshTokenRow {
    token_id: Uuid,
    member_id: Uuid,
    token: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl RefreshTokenRow {
    fn into_refresh_token(self) -> RefreshToken {
        RefreshToken::from_db(
            RefreshTokenId::from_uuid(self.token_id),
            MemberId::from_uuid(self.member_id),
            self.token,
            self.expires_at,
            self.created_at,
        )
    }
}
