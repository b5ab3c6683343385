//! Application state
//!
//! One state object aggregating the pool, configuration, repositories and
//! services for dependency injection into handlers.

use doclicitante_core::Config;
use doclicitante_db::{CompanyRepository, DocumentRepository, UserRepository};
use doclicitante_services::{NotificationService, VencimentoService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub user_repository: UserRepository,
    pub company_repository: CompanyRepository,
    pub document_repository: DocumentRepository,
    pub vencimento_service: VencimentoService,
    pub notification_service: NotificationService,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
