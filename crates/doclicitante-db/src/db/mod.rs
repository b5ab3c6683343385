//! Database repositories for data access layer
//!
//! This module contains all repository implementations for database
//! operations. Each repository is responsible for a specific domain entity
//! and provides CRUD operations and specialized queries. Every query is
//! scoped by the owning user; a repository method never returns rows that
//! belong to someone else.

pub mod company;
pub mod document;
pub mod user;

pub use company::CompanyRepository;
pub use document::DocumentRepository;
pub use user::UserRepository;
