//! API constants
//!
//! Versioned path prefix shared by route registration and the OpenAPI spec.

/// API base path prefix, including version
pub const API_PREFIX: &str = "/api/v1";
