use chrono::NaiveDate;
use doclicitante_core::{
    models::NotificationListResponse, vencimento::generate_notifications, AppError,
};
use doclicitante_db::DocumentRepository;
use uuid::Uuid;

/// Service producing the user-facing alert feed.
///
/// Read state is not persisted here: every notification ships with
/// `is_read = false` and a stable id (the document id), and the client keeps
/// its own read marks keyed by that id.
#[derive(Clone)]
pub struct NotificationService {
    document_repository: DocumentRepository,
}

impl NotificationService {
    pub fn new(document_repository: DocumentRepository) -> Self {
        Self { document_repository }
    }

    /// Generate the alert feed across all of the user's companies.
    #[tracing::instrument(skip(self))]
    pub async fn user_notifications(
        &self,
        owner_id: Uuid,
        today: NaiveDate,
    ) -> Result<NotificationListResponse, AppError> {
        let documents = self.document_repository.list_by_owner(owner_id).await?;
        let notifications = generate_notifications(&documents, today);

        Ok(NotificationListResponse {
            total: notifications.len(),
            notifications,
        })
    }
}
