use crate::auth::models::UserContext;
use crate::error::{validation_error, ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use doclicitante_core::models::{
    AttachFileRequest, CreateDocumentRequest, DocumentResponse, UpdateDocumentRequest,
};
use doclicitante_core::vencimento::ExpiryStatus;
use doclicitante_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDocumentsQuery {
    /// Restrict the listing to one validity bucket
    #[serde(default)]
    pub status: Option<ExpiryStatus>,
}

#[utoipa::path(
    post,
    path = "/api/v1/companies/{company_id}/documents",
    tag = "documents",
    params(("company_id" = Uuid, Path, description = "Company ID")),
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document slot created", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, company_id = %company_id, operation = "create_document"))]
pub async fn create_document(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateDocumentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let document = state
        .document_repository
        .create_document(user_ctx.user_id, company_id, request)
        .await
        .map_err(HttpAppError::from)?;

    let today = state.config.today();
    Ok((
        StatusCode::CREATED,
        Json(DocumentResponse::from_document(document, today)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies/{company_id}/documents",
    tag = "documents",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
        ListDocumentsQuery
    ),
    responses(
        (status = 200, description = "Documents with their classification", body = Vec<DocumentResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, company_id = %company_id, operation = "list_documents"))]
pub async fn list_company_documents(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<Uuid>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    // One reference date for the whole listing
    let today = state.config.today();
    let documents = state
        .vencimento_service
        .list_company_documents(user_ctx.user_id, company_id, today, query.status)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/v1/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document found", body = DocumentResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, document_id = %id, operation = "get_document"))]
pub async fn get_document(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .document_repository
        .get_document(user_ctx.user_id, id)
        .await
        .map_err(HttpAppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

    let today = state.config.today();
    Ok(Json(DocumentResponse::from_document(document, today)))
}

#[utoipa::path(
    put,
    path = "/api/v1/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Document updated", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, document_id = %id, operation = "update_document"))]
pub async fn update_document(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateDocumentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let document = state
        .document_repository
        .update_document(user_ctx.user_id, id, request)
        .await
        .map_err(HttpAppError::from)?;

    let today = state.config.today();
    Ok(Json(DocumentResponse::from_document(document, today)))
}

#[utoipa::path(
    put,
    path = "/api/v1/documents/{id}/attachment",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = AttachFileRequest,
    responses(
        (status = 200, description = "File attached", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user_ctx.user_id, document_id = %id, operation = "attach_file"))]
pub async fn attach_file(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AttachFileRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(validation_error)?;

    let document = state
        .document_repository
        .attach_file(user_ctx.user_id, id, request)
        .await
        .map_err(HttpAppError::from)?;

    let today = state.config.today();
    Ok(Json(DocumentResponse::from_document(document, today)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/documents/{id}/attachment",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Attachment removed, document reverts to placeholder", body = DocumentResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, document_id = %id, operation = "detach_file"))]
pub async fn detach_file(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .document_repository
        .detach_file(user_ctx.user_id, id)
        .await
        .map_err(HttpAppError::from)?;

    let today = state.config.today();
    Ok(Json(DocumentResponse::from_document(document, today)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user_ctx.user_id, document_id = %id, operation = "delete_document"))]
pub async fn delete_document(
    user_ctx: UserContext,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .document_repository
        .delete_document(user_ctx.user_id, id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
