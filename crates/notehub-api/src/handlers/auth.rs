//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use notehub_service::AuthOutcome;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, MeResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn auth_response(message: &str, outcome: AuthOutcome) -> AuthResponse {
    AuthResponse {
        message: message.to_string(),
        token: outcome.token,
        expires_at: outcome.expires_at,
        user: outcome.user.into(),
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(req) = payload?;
    let outcome = state.account_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(auth_response("User created successfully", outcome)),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(req) = payload?;
    let outcome = state
        .account_service
        .login(
            req.email.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(auth_response("Login successful", outcome)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state.account_service.current_user(&auth).await?;
    Ok(Json(MeResponse { user: user.into() }))
}
