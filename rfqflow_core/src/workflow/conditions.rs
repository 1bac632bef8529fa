use crate::format::{self, DateStyle};
use crate::record::{Field, SigningStatus, WorkflowRecord};

/// When a milestone counts as done. Each check is a presence test on the
/// record; nothing here looks at other milestones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Present(Field),
    SigningIs(SigningStatus),
    /// Strictly greater than zero.
    Positive(Field),
    AnyOf(&'static [Condition]),
}

impl Condition {
    pub fn holds(&self, record: &WorkflowRecord) -> bool {
        match self {
            Condition::Present(field) => record.is_present(*field),
            Condition::SigningIs(status) => record.docusign_status == Some(*status),
            Condition::Positive(field) => record.amount(*field).is_some_and(|a| a > 0.0),
            Condition::AnyOf(conditions) => conditions.iter().any(|c| c.holds(record)),
        }
    }
}

/// What a milestone shows next to its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Info {
    Nothing,
    Value(Field),
    Prefixed(&'static str, Field),
    Date(Field, DateStyle),
    Rand(Field),
    WhenSigning(SigningStatus, &'static str),
}

impl Info {
    pub fn render(&self, record: &WorkflowRecord) -> Option<String> {
        match self {
            Info::Nothing => None,
            Info::Value(field) => value_text(record, *field),
            Info::Prefixed(prefix, field) => {
                value_text(record, *field).map(|v| format!("{}{}", prefix, v))
            }
            Info::Date(field, style) => record
                .text(*field)
                .and_then(|raw| format::format_date(raw, *style)),
            Info::Rand(field) => record
                .amount(*field)
                .filter(|a| *a != 0.0)
                .and_then(format::format_rand),
            Info::WhenSigning(status, text) => {
                (record.docusign_status == Some(*status)).then(|| text.to_string())
            }
        }
    }
}

fn value_text(record: &WorkflowRecord, field: Field) -> Option<String> {
    record
        .text(field)
        .map(str::to_string)
        .or_else(|| record.integer(field).map(|n| n.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const APPROVED: Condition = Condition::AnyOf(&[
        Condition::SigningIs(SigningStatus::Completed),
        Condition::Present(Field::OrderNumber),
    ]);

    #[test]
    fn test_any_of_accepts_either_branch() {
        let mut record = WorkflowRecord::new(1);
        assert!(!APPROVED.holds(&record));

        record.docusign_status = Some(SigningStatus::Completed);
        assert!(APPROVED.holds(&record));

        record.docusign_status = Some(SigningStatus::Pending);
        assert!(!APPROVED.holds(&record));

        record.order_number = Some("PO-9".to_string());
        assert!(APPROVED.holds(&record));
    }

    #[test]
    fn test_positive_is_strict() {
        let mut record = WorkflowRecord::new(1);
        let paid = Condition::Positive(Field::AmountPaid);

        assert!(!paid.holds(&record));

        record.amount_paid = Some(0.0);
        assert!(!paid.holds(&record));

        record.amount_paid = Some(-5.0);
        assert!(!paid.holds(&record));

        record.amount_paid = Some(0.01);
        assert!(paid.holds(&record));
    }

    #[test]
    fn test_info_rendering() {
        let record = WorkflowRecord {
            job_id: Some(12),
            request_date: Some("2024-03-15T08:30:00Z".to_string()),
            docusign_status: Some(SigningStatus::Pending),
            amount_paid: Some(1500.0),
            ..WorkflowRecord::new(1)
        };

        assert_eq!(
            Info::Prefixed("Job #", Field::JobId).render(&record).as_deref(),
            Some("Job #12")
        );
        assert_eq!(
            Info::Date(Field::RequestDate, DateStyle::Numeric)
                .render(&record)
                .as_deref(),
            Some("2024/03/15")
        );
        assert_eq!(
            Info::WhenSigning(SigningStatus::Pending, "Awaiting")
                .render(&record)
                .as_deref(),
            Some("Awaiting")
        );
        assert_eq!(
            Info::Rand(Field::AmountPaid).render(&record).as_deref(),
            Some("R 1,500.00")
        );
        assert_eq!(Info::Value(Field::QuoteNumber).render(&record), None);
        assert_eq!(Info::Nothing.render(&record), None);
    }

    #[test]
    fn test_zero_amount_has_no_rand_info() {
        let record = WorkflowRecord {
            amount_paid: Some(0.0),
            ..WorkflowRecord::new(1)
        };

        assert_eq!(Info::Rand(Field::AmountPaid).render(&record), None);
    }
}
