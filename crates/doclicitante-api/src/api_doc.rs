//! OpenAPI documentation.
//! All endpoints are versioned under the prefix in `crate::constants::API_PREFIX`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use doclicitante_core::models;
use doclicitante_core::vencimento;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocLicitante API",
        version = "0.1.0",
        description = "Document-expiration tracking for public-tender bidding. Manages companies, their regulatory certificates, expiry classification, and the alert feed. All endpoints are versioned under /api/v1/."
    ),
    paths(
        // Profile
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        // Companies
        handlers::companies::create_company,
        handlers::companies::list_companies,
        handlers::companies::get_company,
        handlers::companies::update_company,
        handlers::companies::set_company_status,
        handlers::companies::delete_company,
        // Documents
        handlers::documents::create_document,
        handlers::documents::list_company_documents,
        handlers::documents::get_document,
        handlers::documents::update_document,
        handlers::documents::attach_file,
        handlers::documents::detach_file,
        handlers::documents::delete_document,
        // Dashboard / stats
        handlers::dashboard::get_dashboard_stats,
        handlers::dashboard::get_company_vencimento,
        // Notifications
        handlers::notifications::list_notifications,
    ),
    components(schemas(
        error::ErrorResponse,
        models::ProfileResponse,
        models::UpdateProfileRequest,
        models::CompanyStatus,
        models::CompanyResponse,
        models::CreateCompanyRequest,
        models::UpdateCompanyRequest,
        models::SetCompanyStatusRequest,
        models::CreateDocumentRequest,
        models::UpdateDocumentRequest,
        models::AttachFileRequest,
        models::DocumentResponse,
        models::CompanyVencimentoStats,
        models::DashboardStats,
        models::Notification,
        models::NotificationSeverity,
        models::NotificationListResponse,
        vencimento::ExpiryStatus,
        vencimento::Classification,
        vencimento::ExpiryCounts,
    )),
    tags(
        (name = "profile", description = "Authenticated user profile"),
        (name = "companies", description = "Company (empresa) management"),
        (name = "documents", description = "Certificate/document tracking"),
        (name = "dashboard", description = "Expiry statistics"),
        (name = "notifications", description = "Expiry alert feed")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_contains_core_paths() {
        let spec = get_openapi_spec();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/dashboard/stats"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/api/v1/companies/{id}/vencimento"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/notifications"));
    }
}
