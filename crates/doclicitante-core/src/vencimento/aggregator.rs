use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Document;

use super::classifier::{classify_document, ExpiryStatus};

/// Bucket counts over a document collection.
///
/// Invariant: `valid + expiring + pending` always equals the number of
/// documents counted. The reduction is commutative and associative, so
/// partial counts can be merged in any order.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
pub struct ExpiryCounts {
    pub valid: i64,
    pub expiring: i64,
    pub pending: i64,
}

impl ExpiryCounts {
    pub fn total(&self) -> i64 {
        self.valid + self.expiring + self.pending
    }

    /// Record one classified document in the matching bucket.
    pub fn record(&mut self, status: ExpiryStatus) {
        match status {
            ExpiryStatus::Valid => self.valid += 1,
            ExpiryStatus::Expiring => self.expiring += 1,
            ExpiryStatus::ExpiredOrPending => self.pending += 1,
        }
    }

    /// Merge two partial counts (e.g. per-company counts into a user total).
    pub fn merge(self, other: ExpiryCounts) -> ExpiryCounts {
        ExpiryCounts {
            valid: self.valid + other.valid,
            expiring: self.expiring + other.expiring,
            pending: self.pending + other.pending,
        }
    }
}

/// Count a document collection into buckets against a fixed reference date.
///
/// Empty input yields all zeros. Order of the input never affects the
/// result. Placeholders and undated documents short-circuit to pending via
/// the classifier's attachment-state handling, each counted exactly once.
pub fn count_documents(documents: &[Document], today: NaiveDate) -> ExpiryCounts {
    let mut counts = ExpiryCounts::default();
    for document in documents {
        counts.record(classify_document(document, today).status);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(is_placeholder: bool, due_date: Option<NaiveDate>) -> Document {
        Document {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Certidão Municipal".to_string(),
            category: None,
            issue_date: None,
            due_date,
            is_placeholder,
            file_url: None,
            drive_file_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn doc_due_in(days: i64, today: NaiveDate) -> Document {
        doc(false, Some(today + Duration::days(days)))
    }

    #[test]
    fn test_empty_collection_counts_to_zero() {
        let counts = count_documents(&[], date(2026, 6, 15));
        assert_eq!(counts, ExpiryCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_all_valid_scenario() {
        let today = date(2026, 6, 15);
        let documents = vec![
            doc_due_in(30, today),
            doc_due_in(100, today),
            doc_due_in(16, today),
        ];
        let counts = count_documents(&documents, today);
        assert_eq!(counts.valid, 3);
        assert_eq!(counts.expiring, 0);
        assert_eq!(counts.pending, 0);
    }

    #[test]
    fn test_mixed_scenario() {
        // Due in -5, 0, 7, 15, 16 days plus one placeholder:
        // -5 and the placeholder land in pending, 0/7/15 in expiring, 16 in valid.
        let today = date(2026, 6, 15);
        let documents = vec![
            doc_due_in(-5, today),
            doc_due_in(0, today),
            doc_due_in(7, today),
            doc_due_in(15, today),
            doc_due_in(16, today),
            doc(true, None),
        ];
        let counts = count_documents(&documents, today);
        assert_eq!(counts.valid, 1);
        assert_eq!(counts.expiring, 3);
        assert_eq!(counts.pending, 2);
    }

    #[test]
    fn test_partition_invariant() {
        let today = date(2026, 6, 15);
        let documents = vec![
            doc_due_in(-30, today),
            doc_due_in(-1, today),
            doc_due_in(0, today),
            doc_due_in(10, today),
            doc_due_in(15, today),
            doc_due_in(16, today),
            doc_due_in(365, today),
            doc(true, Some(today - Duration::days(1))),
            doc(true, None),
            doc(false, None),
        ];
        let counts = count_documents(&documents, today);
        assert_eq!(counts.total(), documents.len() as i64);
    }

    #[test]
    fn test_placeholder_counted_exactly_once_as_pending() {
        // A placeholder whose stored due date would compute a negative day
        // count still contributes a single pending count.
        let today = date(2026, 6, 15);
        let documents = vec![doc(true, Some(today - Duration::days(1)))];
        let counts = count_documents(&documents, today);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_order_independence() {
        let today = date(2026, 6, 15);
        let mut documents = vec![
            doc_due_in(-5, today),
            doc_due_in(3, today),
            doc_due_in(40, today),
            doc(false, None),
        ];
        let forward = count_documents(&documents, today);
        documents.reverse();
        let backward = count_documents(&documents, today);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = ExpiryCounts {
            valid: 2,
            expiring: 1,
            pending: 0,
        };
        let b = ExpiryCounts {
            valid: 0,
            expiring: 4,
            pending: 3,
        };
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).total(), a.total() + b.total());
    }
}
