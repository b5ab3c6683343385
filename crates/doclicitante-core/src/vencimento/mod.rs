//! Vencimento (expiration) engine
//!
//! Single source of truth for document-expiration arithmetic: the day-count
//! classifier, the bucket aggregator, and the notification generator. Every
//! endpoint and service that needs expiry state calls into this module;
//! threshold logic must never be reimplemented at a call site.
//!
//! All functions are pure. The reference date (`today`) is an explicit
//! parameter, captured once per request by the caller — never read from the
//! clock in here.

mod aggregator;
mod classifier;
mod notifier;

pub use aggregator::{count_documents, ExpiryCounts};
pub use classifier::{
    classify, classify_document, days_until, Classification, ExpiryStatus, EXPIRING_WINDOW_DAYS,
};
pub use notifier::{generate_notifications, severity_for, NOTICE_TRIGGER_DAYS, URGENT_WINDOW_DAYS};
