use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use doclicitante_core::models::{CompanyVencimentoStats, DashboardStats};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "User-level expiry statistics", body = DashboardStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, operation = "dashboard_stats"))]
pub async fn get_dashboard_stats(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let today = state.config.today();
    let stats = state
        .vencimento_service
        .dashboard_stats(user_ctx.user_id, today)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}/vencimento",
    tag = "dashboard",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company expiry statistics", body = CompanyVencimentoStats),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, company_id = %id, operation = "company_vencimento"))]
pub async fn get_company_vencimento(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let today = state.config.today();
    let stats = state
        .vencimento_service
        .company_stats(user_ctx.user_id, id, today)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(stats))
}
