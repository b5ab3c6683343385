use chrono::NaiveDate;

use crate::models::{DocumentWithCompany, Notification, NotificationSeverity};

use super::classifier::days_until;

/// Documents due within this many days (starting at 1) trigger an urgent
/// alert. A document due today triggers nothing: its warning windows at 20,
/// 15 and 10 days have already passed, and the aggregate buckets surface it
/// as expiring.
pub const URGENT_WINDOW_DAYS: i64 = 10;

/// Exact day counts that trigger an advance notice.
pub const NOTICE_TRIGGER_DAYS: [i64; 2] = [15, 20];

/// Map a day count to an alert severity, or `None` when the count falls in
/// a gap (0, 11-14, 16-19, 21+). The ranges are disjoint; at most one
/// severity ever applies.
pub fn severity_for(days_remaining: i64) -> Option<NotificationSeverity> {
    if days_remaining < 0 {
        Some(NotificationSeverity::Overdue)
    } else if (1..=URGENT_WINDOW_DAYS).contains(&days_remaining) {
        Some(NotificationSeverity::Urgent)
    } else if NOTICE_TRIGGER_DAYS.contains(&days_remaining) {
        Some(NotificationSeverity::Notice)
    } else {
        None
    }
}

/// Generate the alert feed for a flattened document collection.
///
/// Placeholders and undated documents are skipped entirely: they surface as
/// pending in the aggregate counts, not as dated alerts. Output is sorted
/// ascending by `days_remaining` (most overdue first); the sort is stable,
/// so ties keep input order and the feed is reproducible.
pub fn generate_notifications(
    documents: &[DocumentWithCompany],
    today: NaiveDate,
) -> Vec<Notification> {
    let mut notifications: Vec<Notification> = documents
        .iter()
        .filter_map(|entry| build_notification(entry, today))
        .collect();
    notifications.sort_by_key(|n| n.days_remaining);
    notifications
}

fn build_notification(entry: &DocumentWithCompany, today: NaiveDate) -> Option<Notification> {
    let document = &entry.document;
    if document.is_placeholder {
        return None;
    }
    let due_date = document.due_date?;

    let days_remaining = days_until(due_date, today);
    let severity = severity_for(days_remaining)?;

    let due_rendered = due_date.format("%d/%m/%Y").to_string();
    let (title, description) = match severity {
        NotificationSeverity::Overdue => (
            "Documento vencido".to_string(),
            format!(
                "O documento \"{}\" da empresa {} está vencido desde {}.",
                document.name, entry.company_name, due_rendered
            ),
        ),
        NotificationSeverity::Urgent => (
            "Vencimento próximo".to_string(),
            format!(
                "O documento \"{}\" da empresa {} vence em {} ({}).",
                document.name,
                entry.company_name,
                render_day_count(days_remaining),
                due_rendered
            ),
        ),
        NotificationSeverity::Notice => (
            format!("Vencimento em {} dias", days_remaining),
            format!(
                "O documento \"{}\" da empresa {} vence em {}.",
                document.name, entry.company_name, due_rendered
            ),
        ),
    };

    Some(Notification {
        id: document.id,
        severity,
        title,
        description,
        document_name: document.name.clone(),
        company_name: entry.company_name.clone(),
        due_date,
        days_remaining,
        is_read: false,
    })
}

fn render_day_count(days: i64) -> String {
    if days == 1 {
        "1 dia".to_string()
    } else {
        format!("{} dias", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(
        name: &str,
        company: &str,
        is_placeholder: bool,
        due_date: Option<NaiveDate>,
    ) -> DocumentWithCompany {
        DocumentWithCompany {
            document: Document {
                id: Uuid::new_v4(),
                company_id: Uuid::new_v4(),
                name: name.to_string(),
                category: None,
                issue_date: None,
                due_date,
                is_placeholder,
                file_url: None,
                drive_file_id: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            company_name: company.to_string(),
        }
    }

    fn entry_due_in(days: i64, today: NaiveDate) -> DocumentWithCompany {
        entry(
            "Certidão Negativa",
            "Empresa Alfa",
            false,
            Some(today + Duration::days(days)),
        )
    }

    #[test]
    fn test_severity_thresholds_exact() {
        // Negative: overdue
        assert_eq!(severity_for(-1), Some(NotificationSeverity::Overdue));
        assert_eq!(severity_for(-365), Some(NotificationSeverity::Overdue));

        // Due today: silent
        assert_eq!(severity_for(0), None);

        // 1 through 10 inclusive: urgent
        for days in 1..=10 {
            assert_eq!(
                severity_for(days),
                Some(NotificationSeverity::Urgent),
                "day {} should be urgent",
                days
            );
        }

        // Gaps emit nothing
        for days in [11, 12, 13, 14, 16, 17, 18, 19, 21, 30, 100] {
            assert_eq!(severity_for(days), None, "day {} should be silent", days);
        }

        // Exact notice triggers
        assert_eq!(severity_for(15), Some(NotificationSeverity::Notice));
        assert_eq!(severity_for(20), Some(NotificationSeverity::Notice));
    }

    #[test]
    fn test_placeholder_and_undated_are_skipped() {
        let today = date(2026, 6, 15);
        let entries = vec![
            entry("Alvará", "Empresa Alfa", true, Some(today - Duration::days(3))),
            entry("Balanço", "Empresa Alfa", false, None),
        ];
        assert!(generate_notifications(&entries, today).is_empty());
    }

    #[test]
    fn test_mixed_scenario_ordering() {
        // Due in -5, 0, 7, 15, 16 days plus a placeholder: exactly three
        // alerts, ordered most overdue first.
        let today = date(2026, 6, 15);
        let entries = vec![
            entry_due_in(16, today),
            entry_due_in(15, today),
            entry_due_in(7, today),
            entry_due_in(0, today),
            entry_due_in(-5, today),
            entry("Alvará", "Empresa Alfa", true, None),
        ];

        let notifications = generate_notifications(&entries, today);
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0].days_remaining, -5);
        assert_eq!(notifications[0].severity, NotificationSeverity::Overdue);
        assert_eq!(notifications[1].days_remaining, 7);
        assert_eq!(notifications[1].severity, NotificationSeverity::Urgent);
        assert_eq!(notifications[2].days_remaining, 15);
        assert_eq!(notifications[2].severity, NotificationSeverity::Notice);
    }

    #[test]
    fn test_due_today_counts_as_expiring_but_stays_silent() {
        // Product decision carried from the source: a document due today is
        // in the expiring aggregate bucket yet generates no alert.
        let today = date(2026, 6, 15);
        let due_today = entry_due_in(0, today);

        let classification = crate::vencimento::classify(due_today.document.due_date, today);
        assert_eq!(
            classification.status,
            crate::vencimento::ExpiryStatus::Expiring
        );
        assert!(generate_notifications(&[due_today], today).is_empty());
    }

    #[test]
    fn test_notification_reuses_document_id() {
        let today = date(2026, 6, 15);
        let e = entry_due_in(5, today);
        let document_id = e.document.id;

        let first = generate_notifications(std::slice::from_ref(&e), today);
        let second = generate_notifications(&[e], today);
        assert_eq!(first[0].id, document_id);
        assert_eq!(second[0].id, document_id);
    }

    #[test]
    fn test_notification_rendering_pt_br() {
        let today = date(2026, 6, 15);
        let overdue = entry(
            "Certidão FGTS",
            "Construtora Beta",
            false,
            Some(date(2026, 6, 10)),
        );
        let urgent = entry(
            "Certidão INSS",
            "Construtora Beta",
            false,
            Some(date(2026, 6, 16)),
        );

        let notifications = generate_notifications(&[overdue, urgent], today);
        assert_eq!(notifications[0].title, "Documento vencido");
        assert!(notifications[0].description.contains("Certidão FGTS"));
        assert!(notifications[0].description.contains("Construtora Beta"));
        assert!(notifications[0].description.contains("10/06/2026"));

        assert_eq!(notifications[1].title, "Vencimento próximo");
        assert!(notifications[1].description.contains("vence em 1 dia"));
        assert!(notifications[1].description.contains("16/06/2026"));
    }

    #[test]
    fn test_notice_titles_carry_the_trigger_day() {
        let today = date(2026, 6, 15);
        let notifications = generate_notifications(
            &[entry_due_in(15, today), entry_due_in(20, today)],
            today,
        );
        assert_eq!(notifications[0].title, "Vencimento em 15 dias");
        assert_eq!(notifications[1].title, "Vencimento em 20 dias");
    }

    #[test]
    fn test_is_read_defaults_to_false() {
        let today = date(2026, 6, 15);
        let notifications = generate_notifications(&[entry_due_in(3, today)], today);
        assert!(!notifications[0].is_read);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let today = date(2026, 6, 15);
        let first = entry("Certidão A", "Empresa Alfa", false, Some(today + Duration::days(5)));
        let second = entry("Certidão B", "Empresa Beta", false, Some(today + Duration::days(5)));

        let notifications = generate_notifications(&[first, second], today);
        assert_eq!(notifications[0].document_name, "Certidão A");
        assert_eq!(notifications[1].document_name, "Certidão B");
    }
}
