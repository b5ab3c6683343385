use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::vencimento::ExpiryCounts;

/// Bucket counts for a single company
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyVencimentoStats {
    pub company_id: Uuid,
    pub company_name: String,
    pub total_documents: i64,
    pub counts: ExpiryCounts,
}

/// User-level dashboard summary: totals across every company the user owns,
/// plus the per-company breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_companies: i64,
    pub active_companies: i64,
    pub total_documents: i64,
    pub counts: ExpiryCounts,
    pub companies: Vec<CompanyVencimentoStats>,
}
