//! DocLicitante database layer
//!
//! Repository implementations over PostgreSQL. Everything here is plain data
//! access; classification and aggregation stay in doclicitante-core.

pub mod db;

pub use db::{CompanyRepository, DocumentRepository, UserRepository};
