use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use doclicitante_core::models::NotificationListResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    tag = "notifications",
    responses(
        (status = 200, description = "Expiry alert feed, most urgent first", body = NotificationListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, operation = "list_notifications"))]
pub async fn list_notifications(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let today = state.config.today();
    let feed = state
        .notification_service
        .user_notifications(user_ctx.user_id, today)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(feed))
}
