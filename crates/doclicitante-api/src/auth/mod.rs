//! Bearer-token authentication
//!
//! Token issuance lives with the external identity provider; this module
//! only verifies signed claims and resolves them to a `UserContext`.

pub mod middleware;
pub mod models;
