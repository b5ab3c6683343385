//! Notification service
//!
//! Walks the user's documents and emits the alert feed via the core
//! notification generator.

mod service;

pub use service::NotificationService;
