//! Auth handlers — register, login, logout, refresh, validate.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use authgate_core::error::AppError;
use authgate_entity::user::role::UserRole;
use authgate_service::auth::RegisterData;

use crate::dto::request::{
    LoginRequest, LogoutParams, RefreshRequest, RegisterRequest, ValidateRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, RegisteredResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisteredResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if req.password.is_empty() {
        return Err(AppError::validation("Password is required").into());
    }
    let role: UserRole = req.role.parse()?;

    let created = state
        .auth_service
        .register(RegisterData {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(RegisteredResponse {
        id: created.id,
        created_at: created.created_at,
    })))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if req.password.is_empty() {
        return Err(AppError::validation("Password is required").into());
    }

    let tokens = state.auth_service.login(&req.email, req.password).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })))
}

/// POST /auth/logout?email=
pub async fn logout(
    State(state): State<AppState>,
    Query(params): Query<LogoutParams>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let email = params
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::validation("Email is required"))?;

    state.auth_service.logout(&email).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User logged out successfully".to_string(),
    })))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let tokens = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })))
}

/// POST /auth/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.auth_service.validate(&req.access_token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Access token is valid".to_string(),
    })))
}
