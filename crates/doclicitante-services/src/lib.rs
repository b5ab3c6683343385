//! DocLicitante Services Layer
//!
//! This crate is the **business service layer**: it composes the database
//! repositories with the core vencimento engine and exposes the aggregate
//! views the API serves (dashboard statistics, per-company statistics,
//! decorated document listings, the notification feed). Keep orchestration
//! here; keep thin HTTP handling in doclicitante-api.

pub mod notification;
pub mod vencimento;

pub use notification::NotificationService;
pub use vencimento::VencimentoService;
