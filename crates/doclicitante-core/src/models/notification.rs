use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Notification severity for the alert feed. Presentation-only; independent
/// of the aggregate bucket a document lands in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Overdue,
    Urgent,
    Notice,
}

/// A single entry in the user-facing alert feed.
///
/// `id` is the document's id, reused on purpose: clients key their local
/// "mark as read" state on it, so it must stay stable across refetches.
/// `is_read` always starts false here; persistence of read state belongs to
/// the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub severity: NotificationSeverity,
    pub title: String,
    pub description: String,
    pub document_name: String,
    pub company_name: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub is_read: bool,
}

/// Notification feed response
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub total: usize,
}
