//! Profile handlers — read and update.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use authgate_core::error::AppError;
use authgate_entity::user::model::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, ProfileResponse, ProfileUpdatedResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let profile = state.profile_service.get_profile(id).await?;

    Ok(Json(ApiResponse::ok(ProfileResponse {
        email: profile.email,
        first_name: profile.first_name,
        last_name: profile.last_name,
        phone_number: profile.phone_number,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    })))
}

/// PUT /users/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileUpdatedResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = state
        .profile_service
        .update_profile(
            id,
            UpdateProfile {
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                phone_number: req.phone_number,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ProfileUpdatedResponse {
        id: updated.id,
        updated_at: updated.updated_at,
    })))
}
