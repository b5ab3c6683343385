use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::vencimento::{classify_document, ExpiryStatus};

/// Certificate/document tracked for a company.
///
/// A document starts life as a placeholder: a category slot created before
/// any file exists. Attaching a file clears `is_placeholder` and records the
/// external reference (`file_url` + `drive_file_id`) along with the dates
/// printed on the certificate. The service never stores the bytes itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Document {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub is_placeholder: bool,
    pub file_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attachment state of a document, derived from the stored
/// `is_placeholder` flag and the optional due date.
///
/// The flag-plus-nullable-date combination is ambiguous on its own; this
/// variant is what the vencimento engine matches on. `Unattached` dominates:
/// whatever due date a placeholder may carry is not meaningful yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentState {
    /// Placeholder slot, no file uploaded yet
    Unattached,
    /// File attached and the certificate carries a due date
    AttachedWithDueDate(NaiveDate),
    /// File attached but the certificate has no expiry (indeterminate)
    AttachedNoDueDate,
}

impl Document {
    pub fn attachment_state(&self) -> AttachmentState {
        if self.is_placeholder {
            return AttachmentState::Unattached;
        }
        match self.due_date {
            Some(due) => AttachmentState::AttachedWithDueDate(due),
            None => AttachmentState::AttachedNoDueDate,
        }
    }
}

/// Document joined with its owning company's display name, as fetched for
/// user-level aggregation and the notification feed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DocumentWithCompany {
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub document: Document,
    pub company_name: String,
}

/// Request DTO for creating a document slot (optionally already dated)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Document name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 120, message = "Category must be at most 120 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Request DTO for updating a document's descriptive fields
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Document name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "Category must be at most 120 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    pub issue_date: Option<Option<NaiveDate>>, // Option<Option> to distinguish no-change from clearing
    #[serde(default)]
    pub due_date: Option<Option<NaiveDate>>,
}

/// Request DTO for attaching an externally stored file to a document
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AttachFileRequest {
    #[validate(
        url(message = "Invalid file URL"),
        length(max = 2048, message = "File URL must be at most 2048 characters")
    )]
    pub file_url: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Drive file id must be between 1 and 255 characters"
    ))]
    pub drive_file_id: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Document in responses, decorated with the classification for the
/// request's reference date so list UIs can filter without re-deriving it.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub is_placeholder: bool,
    pub file_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub days_remaining: Option<i64>,
    pub status: ExpiryStatus,
    /// True only for placeholder slots. An attached document with no due
    /// date still aggregates as pending but is not flagged here.
    pub needs_attachment: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentResponse {
    pub fn from_document(document: Document, today: NaiveDate) -> Self {
        let classification = classify_document(&document, today);
        DocumentResponse {
            id: document.id,
            company_id: document.company_id,
            name: document.name,
            category: document.category,
            issue_date: document.issue_date,
            due_date: document.due_date,
            is_placeholder: document.is_placeholder,
            needs_attachment: document.is_placeholder,
            file_url: document.file_url,
            drive_file_id: document.drive_file_id,
            days_remaining: classification.days_remaining,
            status: classification.status,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}
