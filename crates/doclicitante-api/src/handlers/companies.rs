use crate::auth::models::UserContext;
use crate::error::{validation_error, ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use doclicitante_core::models::{
    CompanyResponse, CreateCompanyRequest, SetCompanyStatusRequest, UpdateCompanyRequest,
};
use doclicitante_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCompaniesQuery {
    /// Include deactivated companies in the listing
    #[serde(default)]
    pub include_inactive: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company registered", body = CompanyResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, operation = "create_company"))]
pub async fn create_company(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateCompanyRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let company = state
        .company_repository
        .create_company(user_ctx.user_id, request)
        .await
        .map_err(HttpAppError::from)?;

    Ok((StatusCode::CREATED, Json(CompanyResponse::from(company))))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies",
    tag = "companies",
    params(ListCompaniesQuery),
    responses(
        (status = 200, description = "List of the user's companies", body = Vec<CompanyResponse>)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, operation = "list_companies"))]
pub async fn list_companies(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCompaniesQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let companies = state
        .company_repository
        .list_companies(user_ctx.user_id, query.include_inactive)
        .await
        .map_err(HttpAppError::from)?;

    let responses: Vec<CompanyResponse> =
        companies.into_iter().map(CompanyResponse::from).collect();
    Ok(Json(responses))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}",
    tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, company_id = %id, operation = "get_company"))]
pub async fn get_company(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let company = state
        .company_repository
        .get_company(user_ctx.user_id, id)
        .await
        .map_err(HttpAppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))?;

    Ok(Json(CompanyResponse::from(company)))
}

#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}",
    tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, company_id = %id, operation = "update_company"))]
pub async fn update_company(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let company = state
        .company_repository
        .update_company(user_ctx.user_id, id, request)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(CompanyResponse::from(company)))
}

#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}/status",
    tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = SetCompanyStatusRequest,
    responses(
        (status = 200, description = "Company status updated", body = CompanyResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, company_id = %id, operation = "set_company_status"))]
pub async fn set_company_status(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SetCompanyStatusRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let company = state
        .company_repository
        .set_status(user_ctx.user_id, id, request.status)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(CompanyResponse::from(company)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/companies/{id}",
    tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, company_id = %id, operation = "delete_company"))]
pub async fn delete_company(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .company_repository
        .delete_company(user_ctx.user_id, id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
