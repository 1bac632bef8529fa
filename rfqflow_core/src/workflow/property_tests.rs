//! Property-based tests for the deriver.

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use proptest::prelude::*;

    use crate::record::{SigningStatus, WorkflowRecord};
    use crate::workflow::{Deriver, NextPolicy, Plan};

    fn any_plan() -> impl Strategy<Value = Plan> {
        prop_oneof![Just(Plan::Pipeline), Just(Plan::Staged)]
    }

    fn any_policy() -> impl Strategy<Value = NextPolicy> {
        prop_oneof![Just(NextPolicy::FirstGap), Just(NextPolicy::StrictChain)]
    }

    fn any_status() -> impl Strategy<Value = SigningStatus> {
        prop_oneof![
            Just(SigningStatus::Pending),
            Just(SigningStatus::Completed),
            Just(SigningStatus::Other),
        ]
    }

    fn any_date() -> impl Strategy<Value = String> {
        prop_oneof![
            (2020i32..2030, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{y}-{m:02}-{d:02}")),
            Just("not a date".to_string()),
        ]
    }

    fn any_reference() -> impl Strategy<Value = String> {
        "[A-Z]{1,3}-[0-9]{1,5}"
    }

    /// A record where each field is independently present or absent.
    fn any_record() -> impl Strategy<Value = WorkflowRecord> {
        let identity = (
            proptest::option::of(1i64..100_000),
            proptest::option::of(any_date()),
            proptest::option::of("[A-Z][a-z]{2,8}"),
            proptest::option::of(any_reference()),
            proptest::option::of(any_date()),
            proptest::option::of("quotes/[a-z0-9]{4}\\.pdf"),
            proptest::option::of(any_date()),
            proptest::option::of(any_status()),
            proptest::option::of(any_date()),
        );
        let fulfilment = (
            proptest::option::of(any_reference()),
            proptest::option::of(any_date()),
            proptest::option::of(0i64..10_000),
            proptest::option::of(any_reference()),
            proptest::option::of(any_date()),
            proptest::option::of(any_reference()),
            proptest::option::of(any_date()),
            proptest::option::of(-100.0f64..100_000.0),
            proptest::option::of(any_date()),
        );

        (identity, fulfilment).prop_map(|(a, b)| WorkflowRecord {
            id: a.0,
            request_date: a.1,
            assigned_quoter: a.2,
            quote_number: a.3,
            quote_date: a.4,
            quote_pdf_path: a.5,
            quote_pdf_upload_date: a.6,
            docusign_status: a.7,
            signed_date: a.8,
            order_number: b.0,
            order_date: b.1,
            job_id: b.2,
            job_number: b.3,
            job_created_date: b.4,
            invoice_number: b.5,
            invoice_date: b.6,
            amount_paid: b.7,
            payment_date: b.8,
        })
    }

    /// Fills the fields `base` lacks with the ones `extra` has.
    fn with_added_fields(base: &WorkflowRecord, extra: &WorkflowRecord) -> WorkflowRecord {
        let b = base.clone();
        let e = extra.clone();

        WorkflowRecord {
            id: b.id.or(e.id),
            request_date: b.request_date.or(e.request_date),
            assigned_quoter: b.assigned_quoter.or(e.assigned_quoter),
            quote_number: b.quote_number.or(e.quote_number),
            quote_date: b.quote_date.or(e.quote_date),
            quote_pdf_path: b.quote_pdf_path.or(e.quote_pdf_path),
            quote_pdf_upload_date: b.quote_pdf_upload_date.or(e.quote_pdf_upload_date),
            docusign_status: b.docusign_status.or(e.docusign_status),
            signed_date: b.signed_date.or(e.signed_date),
            order_number: b.order_number.or(e.order_number),
            order_date: b.order_date.or(e.order_date),
            job_id: b.job_id.or(e.job_id),
            job_number: b.job_number.or(e.job_number),
            job_created_date: b.job_created_date.or(e.job_created_date),
            invoice_number: b.invoice_number.or(e.invoice_number),
            invoice_date: b.invoice_date.or(e.invoice_date),
            amount_paid: b.amount_paid.or(e.amount_paid),
            payment_date: b.payment_date.or(e.payment_date),
        }
    }

    proptest! {
        /// Property: deriving twice gives identical output and leaves the record alone
        #[test]
        fn test_derive_is_idempotent(record in any_record(), plan in any_plan(), policy in any_policy()) {
            let original = record.clone();
            let deriver = Deriver::new(plan, policy);

            let first = deriver.derive(&record);
            let second = deriver.derive(&record);

            prop_assert_eq!(first, second);
            prop_assert_eq!(record, original);
        }

        /// Property: at most one milestone is next, and complete means none is
        #[test]
        fn test_at_most_one_next(record in any_record(), plan in any_plan(), policy in any_policy()) {
            let progress = Deriver::new(plan, policy).derive(&record);
            let next_count = progress.milestones.iter().filter(|m| m.is_next).count();

            prop_assert!(next_count <= 1);
            prop_assert_eq!(progress.complete, next_count == 0);
            prop_assert_eq!(progress.next.is_some(), next_count == 1);
            prop_assert!(progress.milestones.iter().all(|m| !(m.is_next && m.done)));
        }

        /// Property: under first-gap, next is the earliest milestone not done
        #[test]
        fn test_first_gap_is_earliest_undone(record in any_record(), plan in any_plan()) {
            let progress = Deriver::new(plan, NextPolicy::FirstGap).derive(&record);
            let earliest = progress.milestones.iter().position(|m| !m.done);
            let flagged = progress.milestones.iter().position(|m| m.is_next);

            prop_assert_eq!(earliest, flagged);
        }

        /// Property: the sequence is fixed per plan
        #[test]
        fn test_milestone_order_is_fixed(record in any_record(), plan in any_plan(), policy in any_policy()) {
            let progress = Deriver::new(plan, policy).derive(&record);
            let keys: Vec<_> = progress.milestones.iter().map(|m| m.key).collect();
            let expected: Vec<_> = plan.milestones().iter().map(|m| m.key).collect();

            prop_assert_eq!(keys, expected);
            prop_assert_eq!(progress.total, plan.milestones().len());
        }

        /// Property: adding previously absent fields never undoes a milestone
        #[test]
        fn test_adding_fields_is_monotone(
            base in any_record(),
            extra in any_record(),
            plan in any_plan(),
            policy in any_policy(),
        ) {
            let deriver = Deriver::new(plan, policy);
            let before = deriver.derive(&base);
            let after = deriver.derive(&with_added_fields(&base, &extra));

            prop_assert!(after.completed_count >= before.completed_count);
            for (b, a) in before.milestones.iter().zip(&after.milestones) {
                prop_assert!(!b.done || a.done, "{} was undone", b.key);
            }
        }

        /// Property: percentage stays in range and tracks the count
        #[test]
        fn test_percent_bounds(record in any_record(), plan in any_plan(), policy in any_policy()) {
            let progress = Deriver::new(plan, policy).derive(&record);

            prop_assert!(progress.progress_percent <= 100);
            prop_assert_eq!(progress.progress_percent == 100, progress.completed_count == progress.total);
            prop_assert_eq!(progress.progress_percent == 0, progress.completed_count == 0);
            prop_assert_eq!(progress.remaining, progress.total - progress.completed_count);
        }
    }
}
