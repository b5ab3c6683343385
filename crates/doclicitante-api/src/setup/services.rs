//! Service and repository wiring

use crate::state::AppState;
use doclicitante_core::Config;
use doclicitante_db::{CompanyRepository, DocumentRepository, UserRepository};
use doclicitante_services::{NotificationService, VencimentoService};
use sqlx::PgPool;
use std::sync::Arc;

/// Build repositories and services over the shared pool.
pub fn initialize_services(config: &Config, pool: PgPool) -> Arc<AppState> {
    let user_repository = UserRepository::new(pool.clone());
    let company_repository = CompanyRepository::new(pool.clone());
    let document_repository = DocumentRepository::new(pool.clone());

    let vencimento_service =
        VencimentoService::new(company_repository.clone(), document_repository.clone());
    let notification_service = NotificationService::new(document_repository.clone());

    Arc::new(AppState {
        pool,
        config: config.clone(),
        user_repository,
        company_repository,
        document_repository,
        vencimento_service,
        notification_service,
    })
}
