//! HTTP request handlers

pub mod companies;
pub mod dashboard;
pub mod documents;
pub mod notifications;
pub mod profile;
