use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::cnpj::validate_cnpj;

/// Company status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "company_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Inactive,
}

/// Company (empresa) entity. All queries against companies are scoped by
/// `owner_id`; a company is only ever visible to the user that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Company {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub status: CompanyStatus,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for registering a new company
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Company name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[validate(custom(function = validate_cnpj))]
    pub cnpj: String,
    #[serde(default)]
    #[validate(email(message = "Invalid contact email"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "City must be at most 120 characters"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 2,
        message = "State must be a two-letter UF code"
    ))]
    pub state: Option<String>,
}

/// Request DTO for updating a company
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Company name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email(message = "Invalid contact email"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "City must be at most 120 characters"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 2,
        message = "State must be a two-letter UF code"
    ))]
    pub state: Option<String>,
}

/// Request DTO for activating/deactivating a company
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCompanyStatusRequest {
    pub status: CompanyStatus,
}

/// Company in responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub status: CompanyStatus,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        CompanyResponse {
            id: company.id,
            name: company.name,
            cnpj: company.cnpj,
            status: company.status,
            email: company.email,
            phone: company.phone,
            city: company.city,
            state: company.state,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
