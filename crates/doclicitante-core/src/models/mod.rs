//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain. Each sub-module represents a specific feature area.

mod company;
mod document;
mod notification;
mod stats;
mod user;

// Re-export all models for convenient imports
pub use company::*;
pub use document::*;
pub use notification::*;
pub use stats::*;
pub use user::*;
