use doclicitante_core::{
    models::{Company, CompanyStatus, CreateCompanyRequest, UpdateCompanyRequest},
    validation::normalize_cnpj,
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const COMPANY_COLUMNS: &str =
    "id, owner_id, name, cnpj, status, email, phone, city, state, created_at, updated_at";

/// Repository for managing companies (empresas)
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new company owned by the given user
    #[tracing::instrument(skip(self, request), fields(db.table = "companies", db.operation = "insert"))]
    pub async fn create_company(
        &self,
        owner_id: Uuid,
        request: CreateCompanyRequest,
    ) -> Result<Company, AppError> {
        let cnpj = normalize_cnpj(&request.cnpj);

        // One registration per CNPJ per user
        let duplicate_exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE owner_id = $1 AND cnpj = $2)",
        )
        .bind(owner_id)
        .bind(&cnpj)
        .fetch_one(&self.pool)
        .await?;

        if duplicate_exists {
            return Err(AppError::BadRequest(
                "A company with this CNPJ is already registered".to_string(),
            ));
        }

        let company = sqlx::query_as::<Postgres, Company>(&format!(
            r#"
            INSERT INTO companies (owner_id, name, cnpj, status, email, phone, city, state)
            VALUES ($1, $2, $3, 'active', $4, $5, $6, $7)
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(owner_id)
        .bind(&request.name)
        .bind(&cnpj)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.city)
        .bind(&request.state)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    /// Get a company by ID (owner-scoped)
    #[tracing::instrument(skip(self), fields(db.table = "companies", db.operation = "select", db.record_id = %id))]
    pub async fn get_company(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<Postgres, Company>(&format!(
            "SELECT {} FROM companies WHERE owner_id = $1 AND id = $2",
            COMPANY_COLUMNS
        ))
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    /// List the user's companies, optionally including inactive ones
    #[tracing::instrument(skip(self), fields(db.table = "companies", db.operation = "select"))]
    pub async fn list_companies(
        &self,
        owner_id: Uuid,
        include_inactive: bool,
    ) -> Result<Vec<Company>, AppError> {
        let companies = if include_inactive {
            sqlx::query_as::<Postgres, Company>(&format!(
                "SELECT {} FROM companies WHERE owner_id = $1 ORDER BY name ASC",
                COMPANY_COLUMNS
            ))
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, Company>(&format!(
                "SELECT {} FROM companies WHERE owner_id = $1 AND status = 'active' ORDER BY name ASC",
                COMPANY_COLUMNS
            ))
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(companies)
    }

    /// Update a company's descriptive fields
    #[tracing::instrument(skip(self, request), fields(db.table = "companies", db.operation = "update", db.record_id = %id))]
    pub async fn update_company(
        &self,
        owner_id: Uuid,
        id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<Postgres, Company>(&format!(
            r#"
            UPDATE companies
            SET name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                city = COALESCE($6, city),
                state = COALESCE($7, state),
                updated_at = NOW()
            WHERE owner_id = $1 AND id = $2
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(owner_id)
        .bind(id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.city)
        .bind(&request.state)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))?;

        Ok(company)
    }

    /// Activate or deactivate a company
    #[tracing::instrument(skip(self), fields(db.table = "companies", db.operation = "update", db.record_id = %id))]
    pub async fn set_status(
        &self,
        owner_id: Uuid,
        id: Uuid,
        status: CompanyStatus,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<Postgres, Company>(&format!(
            r#"
            UPDATE companies
            SET status = $3, updated_at = NOW()
            WHERE owner_id = $1 AND id = $2
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(owner_id)
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))?;

        Ok(company)
    }

    /// Delete a company; its documents go with it (FK cascade)
    #[tracing::instrument(skip(self), fields(db.table = "companies", db.operation = "delete", db.record_id = %id))]
    pub async fn delete_company(&self, owner_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Company {} not found", id)));
        }

        Ok(())
    }
}
