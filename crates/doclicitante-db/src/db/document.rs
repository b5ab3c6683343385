use doclicitante_core::{
    models::{
        AttachFileRequest, CreateDocumentRequest, Document, DocumentWithCompany,
        UpdateDocumentRequest,
    },
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const DOCUMENT_COLUMNS: &str = "d.id, d.company_id, d.name, d.category, d.issue_date, d.due_date, \
     d.is_placeholder, d.file_url, d.drive_file_id, d.created_at, d.updated_at";

/// Repository for managing company documents.
///
/// Documents have no owner column of their own; ownership checks always go
/// through the owning company, so every query joins companies on owner_id.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a document slot under a company.
    ///
    /// New documents are placeholders until a file is attached, whatever
    /// dates the request carries.
    #[tracing::instrument(skip(self, request), fields(db.table = "documents", db.operation = "insert"))]
    pub async fn create_document(
        &self,
        owner_id: Uuid,
        company_id: Uuid,
        request: CreateDocumentRequest,
    ) -> Result<Document, AppError> {
        let company_exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1 AND owner_id = $2)",
        )
        .bind(company_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        if !company_exists {
            return Err(AppError::NotFound(format!(
                "Company {} not found",
                company_id
            )));
        }

        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            INSERT INTO documents (company_id, name, category, issue_date, due_date, is_placeholder)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING id, company_id, name, category, issue_date, due_date,
                      is_placeholder, file_url, drive_file_id, created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(&request.name)
        .bind(&request.category)
        .bind(request.issue_date)
        .bind(request.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Get a document by ID (owner-scoped via the owning company)
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select", db.record_id = %id))]
    pub async fn get_document(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<Postgres, Document>(&format!(
            r#"
            SELECT {}
            FROM documents d
            JOIN companies c ON c.id = d.company_id
            WHERE c.owner_id = $1 AND d.id = $2
            "#,
            DOCUMENT_COLUMNS
        ))
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    /// List all documents of one company
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select"))]
    pub async fn list_by_company(
        &self,
        owner_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<Postgres, Document>(&format!(
            r#"
            SELECT {}
            FROM documents d
            JOIN companies c ON c.id = d.company_id
            WHERE c.owner_id = $1 AND d.company_id = $2
            ORDER BY d.due_date ASC NULLS LAST, d.name ASC
            "#,
            DOCUMENT_COLUMNS
        ))
        .bind(owner_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    /// List every document across all of the user's companies, carrying the
    /// company display name for aggregation and the notification feed.
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select"))]
    pub async fn list_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<DocumentWithCompany>, AppError> {
        let documents = sqlx::query_as::<Postgres, DocumentWithCompany>(&format!(
            r#"
            SELECT {}, c.name AS company_name
            FROM documents d
            JOIN companies c ON c.id = d.company_id
            WHERE c.owner_id = $1
            ORDER BY d.due_date ASC NULLS LAST, d.name ASC
            "#,
            DOCUMENT_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    /// Update a document's descriptive fields and dates.
    ///
    /// `issue_date`/`due_date` distinguish no-change (`None`) from clearing
    /// (`Some(None)`), same as the folder-move pattern elsewhere.
    #[tracing::instrument(skip(self, request), fields(db.table = "documents", db.operation = "update", db.record_id = %id))]
    pub async fn update_document(
        &self,
        owner_id: Uuid,
        id: Uuid,
        request: UpdateDocumentRequest,
    ) -> Result<Document, AppError> {
        let current = self
            .get_document(owner_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

        let name = request.name.unwrap_or(current.name);
        let category = match request.category {
            Some(category) => Some(category),
            None => current.category,
        };
        let issue_date = match request.issue_date {
            Some(issue_date) => issue_date,
            None => current.issue_date,
        };
        let due_date = match request.due_date {
            Some(due_date) => due_date,
            None => current.due_date,
        };

        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            UPDATE documents
            SET name = $2, category = $3, issue_date = $4, due_date = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_id, name, category, issue_date, due_date,
                      is_placeholder, file_url, drive_file_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(&category)
        .bind(issue_date)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Attach an externally stored file, clearing the placeholder flag
    #[tracing::instrument(skip(self, request), fields(db.table = "documents", db.operation = "update", db.record_id = %id))]
    pub async fn attach_file(
        &self,
        owner_id: Uuid,
        id: Uuid,
        request: AttachFileRequest,
    ) -> Result<Document, AppError> {
        let exists = self.get_document(owner_id, id).await?.is_some();
        if !exists {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }

        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            UPDATE documents
            SET file_url = $2,
                drive_file_id = $3,
                issue_date = COALESCE($4, issue_date),
                due_date = COALESCE($5, due_date),
                is_placeholder = FALSE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_id, name, category, issue_date, due_date,
                      is_placeholder, file_url, drive_file_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&request.file_url)
        .bind(&request.drive_file_id)
        .bind(request.issue_date)
        .bind(request.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Remove the attachment reference, reverting the document to a
    /// placeholder slot. The external file itself is the drive's problem.
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "update", db.record_id = %id))]
    pub async fn detach_file(&self, owner_id: Uuid, id: Uuid) -> Result<Document, AppError> {
        let exists = self.get_document(owner_id, id).await?.is_some();
        if !exists {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }

        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            UPDATE documents
            SET file_url = NULL,
                drive_file_id = NULL,
                is_placeholder = TRUE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_id, name, category, issue_date, due_date,
                      is_placeholder, file_url, drive_file_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Delete a document
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "delete", db.record_id = %id))]
    pub async fn delete_document(&self, owner_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents d
            USING companies c
            WHERE c.id = d.company_id AND c.owner_id = $1 AND d.id = $2
            "#,
        )
        .bind(owner_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }

        Ok(())
    }
}
