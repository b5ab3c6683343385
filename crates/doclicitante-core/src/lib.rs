//! DocLicitante Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! vencimento (expiration) engine shared across all DocLicitante components.
//! The vencimento module is the single source of truth for day-count and
//! bucket threshold arithmetic; no other crate may reimplement it.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod vencimento;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use vencimento::{
    classify, classify_document, Classification, ExpiryCounts, ExpiryStatus,
    EXPIRING_WINDOW_DAYS, URGENT_WINDOW_DAYS,
};
