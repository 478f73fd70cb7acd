//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    RefreshUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::{MemberRepository, RefreshTokenRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LogoutRequest, MemberResponse, RefreshRequest, SignInRequest, SignUpRequest,
    TokenPairResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: MemberRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: MemberRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        nickname: req.nickname,
    };

    let member = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<TokenPairResponse>>
where
    R: MemberRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let pair = use_case.execute(input).await?;

    Ok(Json(TokenPairResponse::from(pair)))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RefreshRequest>,
) -> AuthResult<Json<TokenPairResponse>>
where
    R: MemberRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(state.repo.clone(), state.config.clone());

    let pair = use_case.execute(&req.refresh_token).await?;

    Ok(Json(TokenPairResponse::from(pair)))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/logout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogoutRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: MemberRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone());

    use_case.execute(&req.refresh_token).await?;

    Ok(StatusCode::NO_CONTENT)
}
