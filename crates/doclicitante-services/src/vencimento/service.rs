use std::collections::HashMap;

use chrono::NaiveDate;
use doclicitante_core::{
    models::{
        Company, CompanyStatus, CompanyVencimentoStats, DashboardStats, DocumentResponse,
        DocumentWithCompany,
    },
    vencimento::{classify_document, count_documents, ExpiryCounts, ExpiryStatus},
    AppError,
};
use doclicitante_db::{CompanyRepository, DocumentRepository};
use uuid::Uuid;

/// Service producing the aggregate expiry views.
///
/// Every method takes `today` from the caller; the service itself never
/// reads the clock, so a request classifies all of its documents against a
/// single reference date.
#[derive(Clone)]
pub struct VencimentoService {
    company_repository: CompanyRepository,
    document_repository: DocumentRepository,
}

impl VencimentoService {
    pub fn new(
        company_repository: CompanyRepository,
        document_repository: DocumentRepository,
    ) -> Self {
        Self {
            company_repository,
            document_repository,
        }
    }

    /// User-level dashboard: totals and per-company breakdown across every
    /// company the user owns.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard_stats(
        &self,
        owner_id: Uuid,
        today: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        let companies = self.company_repository.list_companies(owner_id, true).await?;
        let documents = self.document_repository.list_by_owner(owner_id).await?;

        Ok(build_dashboard_stats(&companies, &documents, today))
    }

    /// Bucket counts for one company
    #[tracing::instrument(skip(self))]
    pub async fn company_stats(
        &self,
        owner_id: Uuid,
        company_id: Uuid,
        today: NaiveDate,
    ) -> Result<CompanyVencimentoStats, AppError> {
        let company = self
            .company_repository
            .get_company(owner_id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", company_id)))?;

        let documents = self
            .document_repository
            .list_by_company(owner_id, company_id)
            .await?;

        Ok(build_company_stats(&company, count_documents(&documents, today)))
    }

    /// One company's documents, decorated with their classification and
    /// optionally filtered to a single bucket (the list UI's filter).
    #[tracing::instrument(skip(self))]
    pub async fn list_company_documents(
        &self,
        owner_id: Uuid,
        company_id: Uuid,
        today: NaiveDate,
        status_filter: Option<ExpiryStatus>,
    ) -> Result<Vec<DocumentResponse>, AppError> {
        let company_exists = self
            .company_repository
            .get_company(owner_id, company_id)
            .await?
            .is_some();
        if !company_exists {
            return Err(AppError::NotFound(format!(
                "Company {} not found",
                company_id
            )));
        }

        let documents = self
            .document_repository
            .list_by_company(owner_id, company_id)
            .await?;

        let responses = documents
            .into_iter()
            .filter(|document| match status_filter {
                Some(wanted) => classify_document(document, today).status == wanted,
                None => true,
            })
            .map(|document| DocumentResponse::from_document(document, today))
            .collect();

        Ok(responses)
    }
}

/// Reduce a user's companies and flattened documents into the dashboard
/// summary. Pure so the partition invariant is testable without a database.
pub fn build_dashboard_stats(
    companies: &[Company],
    documents: &[DocumentWithCompany],
    today: NaiveDate,
) -> DashboardStats {
    let mut per_company: HashMap<Uuid, ExpiryCounts> = HashMap::new();
    let mut doc_totals: HashMap<Uuid, i64> = HashMap::new();

    for entry in documents {
        let classification = classify_document(&entry.document, today);
        per_company
            .entry(entry.document.company_id)
            .or_default()
            .record(classification.status);
        *doc_totals.entry(entry.document.company_id).or_default() += 1;
    }

    let mut totals = ExpiryCounts::default();
    let mut breakdown = Vec::with_capacity(companies.len());
    for company in companies {
        let counts = per_company.remove(&company.id).unwrap_or_default();
        totals = totals.merge(counts);
        breakdown.push(CompanyVencimentoStats {
            company_id: company.id,
            company_name: company.name.clone(),
            total_documents: doc_totals.remove(&company.id).unwrap_or(0),
            counts,
        });
    }

    DashboardStats {
        total_companies: companies.len() as i64,
        active_companies: companies
            .iter()
            .filter(|c| c.status == CompanyStatus::Active)
            .count() as i64,
        total_documents: documents.len() as i64,
        counts: totals,
        companies: breakdown,
    }
}

/// Shape one company's counts into the per-company stats payload.
pub fn build_company_stats(company: &Company, counts: ExpiryCounts) -> CompanyVencimentoStats {
    CompanyVencimentoStats {
        company_id: company.id,
        company_name: company.name.clone(),
        total_documents: counts.total(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use doclicitante_core::models::Document;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn company(name: &str, status: CompanyStatus) -> Company {
        Company {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            cnpj: "11222333000181".to_string(),
            status,
            email: None,
            phone: None,
            city: None,
            state: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn doc_for(
        company: &Company,
        is_placeholder: bool,
        due_date: Option<NaiveDate>,
    ) -> DocumentWithCompany {
        DocumentWithCompany {
            document: Document {
                id: Uuid::new_v4(),
                company_id: company.id,
                name: "Certidão Estadual".to_string(),
                category: None,
                issue_date: None,
                due_date,
                is_placeholder,
                file_url: None,
                drive_file_id: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            company_name: company.name.clone(),
        }
    }

    #[test]
    fn test_dashboard_stats_empty_user() {
        let stats = build_dashboard_stats(&[], &[], date(2026, 6, 15));
        assert_eq!(stats.total_companies, 0);
        assert_eq!(stats.total_documents, 0);
        assert_eq!(stats.counts, ExpiryCounts::default());
        assert!(stats.companies.is_empty());
    }

    #[test]
    fn test_dashboard_stats_company_without_documents_counts_zero() {
        let alfa = company("Empresa Alfa", CompanyStatus::Active);
        let stats = build_dashboard_stats(
            std::slice::from_ref(&alfa),
            &[],
            date(2026, 6, 15),
        );
        assert_eq!(stats.total_companies, 1);
        assert_eq!(stats.companies.len(), 1);
        assert_eq!(stats.companies[0].total_documents, 0);
        assert_eq!(stats.companies[0].counts, ExpiryCounts::default());
    }

    #[test]
    fn test_dashboard_stats_partitions_per_company() {
        let today = date(2026, 6, 15);
        let alfa = company("Empresa Alfa", CompanyStatus::Active);
        let beta = company("Empresa Beta", CompanyStatus::Inactive);

        let documents = vec![
            doc_for(&alfa, false, Some(today + Duration::days(30))), // valid
            doc_for(&alfa, false, Some(today + Duration::days(5))),  // expiring
            doc_for(&alfa, true, None),                              // pending
            doc_for(&beta, false, Some(today - Duration::days(2))),  // pending
        ];

        let stats = build_dashboard_stats(&[alfa.clone(), beta.clone()], &documents, today);

        assert_eq!(stats.total_companies, 2);
        assert_eq!(stats.active_companies, 1);
        assert_eq!(stats.total_documents, 4);
        assert_eq!(stats.counts.valid, 1);
        assert_eq!(stats.counts.expiring, 1);
        assert_eq!(stats.counts.pending, 2);
        // User totals are exactly the merge of the per-company counts
        assert_eq!(stats.counts.total(), stats.total_documents);

        let alfa_stats = stats
            .companies
            .iter()
            .find(|c| c.company_id == alfa.id)
            .unwrap();
        assert_eq!(alfa_stats.total_documents, 3);
        assert_eq!(alfa_stats.counts.pending, 1);

        let beta_stats = stats
            .companies
            .iter()
            .find(|c| c.company_id == beta.id)
            .unwrap();
        assert_eq!(beta_stats.counts.pending, 1);
        assert_eq!(beta_stats.counts.valid, 0);
    }

    #[test]
    fn test_dashboard_breakdown_keeps_company_list_order() {
        let today = date(2026, 6, 15);
        let alfa = company("Empresa Alfa", CompanyStatus::Active);
        let beta = company("Empresa Beta", CompanyStatus::Active);
        let stats = build_dashboard_stats(&[beta.clone(), alfa.clone()], &[], today);
        assert_eq!(stats.companies[0].company_id, beta.id);
        assert_eq!(stats.companies[1].company_id, alfa.id);
    }

    #[test]
    fn test_build_company_stats_total_matches_counts() {
        let alfa = company("Empresa Alfa", CompanyStatus::Active);
        let counts = ExpiryCounts {
            valid: 2,
            expiring: 1,
            pending: 3,
        };
        let stats = build_company_stats(&alfa, counts);
        assert_eq!(stats.total_documents, 6);
        assert_eq!(stats.company_name, "Empresa Alfa");
    }
}
