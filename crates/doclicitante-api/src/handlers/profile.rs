use crate::auth::models::UserContext;
use crate::error::{validation_error, ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use doclicitante_core::models::{ProfileResponse, UpdateProfileRequest};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Authenticated user's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_profile(user_ctx: UserContext) -> Result<impl IntoResponse, HttpAppError> {
    Ok(Json(ProfileResponse::from(user_ctx.user)))
}

#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, operation = "update_profile"))]
pub async fn update_profile(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let user = state
        .user_repository
        .update_profile(user_ctx.user_id, request.display_name)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(ProfileResponse::from(user)))
}
