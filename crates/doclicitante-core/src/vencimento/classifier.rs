use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AttachmentState, Document};

/// Documents due within this many days (inclusive, counting from today)
/// classify as expiring. A document due in exactly this many days is still
/// expiring, not valid.
pub const EXPIRING_WINDOW_DAYS: i64 = 15;

/// Validity bucket of a document relative to a reference date.
/// The three buckets partition every document: no document is ever in two,
/// and none is in zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Valid,
    Expiring,
    ExpiredOrPending,
}

/// Result of classifying a single due date against a reference date.
/// Derived state only; recomputed on every read and never persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
pub struct Classification {
    /// Whole days from `today` to the due date; negative when overdue,
    /// `None` when the document has no meaningful due date.
    pub days_remaining: Option<i64>,
    pub status: ExpiryStatus,
}

/// Whole-day count from `today` to `due_date`.
///
/// Both operands are calendar dates, so the subtraction is exact: a due
/// date of today yields 0, tomorrow yields 1, yesterday yields -1. Working
/// on `NaiveDate` (rather than timestamps truncated at the call site) is
/// what keeps this stable across DST transitions and partial-day inputs.
pub fn days_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Classify an optional due date against a reference date.
///
/// An absent due date is indeterminate and lands in the expired-or-pending
/// bucket with no day count. Both window bounds are inclusive: due today
/// (0) and due in exactly [`EXPIRING_WINDOW_DAYS`] days are both expiring.
pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Classification {
    let due = match due_date {
        Some(due) => due,
        None => {
            return Classification {
                days_remaining: None,
                status: ExpiryStatus::ExpiredOrPending,
            }
        }
    };

    let days = days_until(due, today);
    let status = if days < 0 {
        ExpiryStatus::ExpiredOrPending
    } else if days <= EXPIRING_WINDOW_DAYS {
        ExpiryStatus::Expiring
    } else {
        ExpiryStatus::Valid
    };

    Classification {
        days_remaining: Some(days),
        status,
    }
}

/// Classify a document, honoring its attachment state.
///
/// A placeholder is always pending: any due date it carries is ignored, so
/// the day count is reported as `None` rather than a stale number.
pub fn classify_document(document: &Document, today: NaiveDate) -> Classification {
    match document.attachment_state() {
        AttachmentState::Unattached | AttachmentState::AttachedNoDueDate => Classification {
            days_remaining: None,
            status: ExpiryStatus::ExpiredOrPending,
        },
        AttachmentState::AttachedWithDueDate(due) => classify(Some(due), today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(is_placeholder: bool, due_date: Option<NaiveDate>) -> Document {
        Document {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Certidão FGTS".to_string(),
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

    fn today() -> NaiveDate {
        date(2026, 6, 15)
    }

    #[test]
    fn test_days_until_signs() {
        let today = today();
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(today + Duration::days(1), today), 1);
        assert_eq!(days_until(today - Duration::days(1), today), -1);
        assert_eq!(days_until(date(2026, 7, 15), today), 30);
    }

    #[test]
    fn test_days_until_across_month_and_year_boundaries() {
        assert_eq!(days_until(date(2027, 1, 1), date(2026, 12, 31)), 1);
        assert_eq!(days_until(date(2026, 3, 1), date(2026, 2, 28)), 1);
        // 2028 is a leap year
        assert_eq!(days_until(date(2028, 3, 1), date(2028, 2, 28)), 2);
    }

    #[test]
    fn test_classify_none_is_pending() {
        let result = classify(None, today());
        assert_eq!(result.days_remaining, None);
        assert_eq!(result.status, ExpiryStatus::ExpiredOrPending);
    }

    #[test]
    fn test_classify_boundary_inclusivity() {
        let today = today();

        // Due today and due in exactly 15 days are both expiring
        let due_today = classify(Some(today), today);
        assert_eq!(due_today.days_remaining, Some(0));
        assert_eq!(due_today.status, ExpiryStatus::Expiring);

        let at_window = classify(Some(today + Duration::days(15)), today);
        assert_eq!(at_window.days_remaining, Some(15));
        assert_eq!(at_window.status, ExpiryStatus::Expiring);

        // One past the window is valid; one before today is expired
        let past_window = classify(Some(today + Duration::days(16)), today);
        assert_eq!(past_window.status, ExpiryStatus::Valid);

        let yesterday = classify(Some(today - Duration::days(1)), today);
        assert_eq!(yesterday.days_remaining, Some(-1));
        assert_eq!(yesterday.status, ExpiryStatus::ExpiredOrPending);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let today = today();
        let due = Some(today + Duration::days(7));
        let first = classify(due, today);
        let second = classify(due, today);
        assert_eq!(first, second);
        assert_eq!(first.days_remaining, Some(7));
    }

    #[test]
    fn test_classify_document_placeholder_dominates() {
        // Due yesterday, but still a placeholder: pending with no day count
        let today = today();
        let placeholder = doc(true, Some(today - Duration::days(1)));
        let result = classify_document(&placeholder, today);
        assert_eq!(result.days_remaining, None);
        assert_eq!(result.status, ExpiryStatus::ExpiredOrPending);
    }

    #[test]
    fn test_classify_document_undated_equivalent_to_placeholder() {
        let today = today();
        let undated = doc(false, None);
        let placeholder = doc(true, None);
        assert_eq!(
            classify_document(&undated, today),
            classify_document(&placeholder, today)
        );
    }

    #[test]
    fn test_classify_document_dated_delegates() {
        let today = today();
        let dated = doc(false, Some(today + Duration::days(30)));
        let result = classify_document(&dated, today);
        assert_eq!(result.days_remaining, Some(30));
        assert_eq!(result.status, ExpiryStatus::Valid);
    }
}
