//! Vencimento service
//!
//! Fetches a user's companies and documents and reduces them into the
//! aggregate views served by the dashboard and per-company endpoints.

mod service;

pub use service::{build_company_stats, build_dashboard_stats, VencimentoService};
