use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::conditions::{Condition, Info};
use super::state::MilestoneKey;
use crate::error::RecordError;
use crate::format::DateStyle;
use crate::record::{Field, SigningStatus};

/// A milestone as defined by a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneDef {
    pub key: MilestoneKey,
    pub label: &'static str,
    pub done: Condition,
    pub info: Info,
    pub date: Option<Field>,
    /// Part of the quote → PDF → signature → order → job → invoice → payment
    /// dependency chain.
    pub chained: bool,
}

const fn step(key: MilestoneKey, label: &'static str, done: Condition, info: Info) -> MilestoneDef {
    MilestoneDef {
        key,
        label,
        done,
        info,
        date: None,
        chained: false,
    }
}

const fn chained(def: MilestoneDef) -> MilestoneDef {
    MilestoneDef {
        chained: true,
        ..def
    }
}

const fn dated(def: MilestoneDef, field: Field) -> MilestoneDef {
    MilestoneDef {
        date: Some(field),
        ..def
    }
}

const SENT: Condition = Condition::AnyOf(&[
    Condition::Present(Field::DocusignStatus),
    Condition::Present(Field::OrderNumber),
]);

// A PO is accepted as proof of approval even when signing was skipped.
const APPROVED: Condition = Condition::AnyOf(&[
    Condition::SigningIs(SigningStatus::Completed),
    Condition::Present(Field::OrderNumber),
]);

const PIPELINE: &[MilestoneDef] = &[
    step(
        MilestoneKey::Received,
        "RFQ Received",
        Condition::Present(Field::Id),
        Info::Date(Field::RequestDate, DateStyle::Numeric),
    ),
    step(
        MilestoneKey::Assigned,
        "Quoter Assigned",
        Condition::Present(Field::AssignedQuoter),
        Info::Value(Field::AssignedQuoter),
    ),
    chained(step(
        MilestoneKey::Quoted,
        "Quote Captured",
        Condition::Present(Field::QuoteNumber),
        Info::Value(Field::QuoteNumber),
    )),
    chained(step(
        MilestoneKey::Pdf,
        "Quote PDF Ready",
        Condition::Present(Field::QuotePdfPath),
        Info::Nothing,
    )),
    step(
        MilestoneKey::Sent,
        "Sent to Customer",
        SENT,
        Info::WhenSigning(SigningStatus::Pending, "Awaiting"),
    ),
    chained(step(
        MilestoneKey::Approved,
        "Customer Approved",
        APPROVED,
        Info::Nothing,
    )),
    chained(step(
        MilestoneKey::Po,
        "PO Received",
        Condition::Present(Field::OrderNumber),
        Info::Value(Field::OrderNumber),
    )),
    chained(step(
        MilestoneKey::Job,
        "Job Created",
        Condition::Present(Field::JobId),
        Info::Prefixed("Job #", Field::JobId),
    )),
    chained(step(
        MilestoneKey::Invoiced,
        "Invoiced",
        Condition::Present(Field::InvoiceNumber),
        Info::Value(Field::InvoiceNumber),
    )),
    chained(step(
        MilestoneKey::Paid,
        "Payment Received",
        Condition::Positive(Field::AmountPaid),
        Info::Nothing,
    )),
];

const STAGED: &[MilestoneDef] = &[
    dated(
        step(
            MilestoneKey::Received,
            "RFQ Created",
            Condition::Present(Field::Id),
            Info::Nothing,
        ),
        Field::RequestDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Quoted,
            "Quote Added",
            Condition::Present(Field::QuoteNumber),
            Info::Value(Field::QuoteNumber),
        )),
        Field::QuoteDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Pdf,
            "PDF Uploaded",
            Condition::Present(Field::QuotePdfPath),
            Info::Nothing,
        )),
        Field::QuotePdfUploadDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Signed,
            "Customer Signed",
            Condition::Present(Field::SignedDate),
            Info::Nothing,
        )),
        Field::SignedDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Po,
            "Order Received",
            Condition::Present(Field::OrderNumber),
            Info::Value(Field::OrderNumber),
        )),
        Field::OrderDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Job,
            "Job Created",
            Condition::Present(Field::JobId),
            Info::Value(Field::JobNumber),
        )),
        Field::JobCreatedDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Invoiced,
            "Invoiced",
            Condition::Present(Field::InvoiceNumber),
            Info::Value(Field::InvoiceNumber),
        )),
        Field::InvoiceDate,
    ),
    dated(
        chained(step(
            MilestoneKey::Paid,
            "Payment Received",
            Condition::Present(Field::PaymentDate),
            Info::Rand(Field::AmountPaid),
        )),
        Field::PaymentDate,
    ),
];

/// A fixed, ordered milestone list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plan {
    /// Ten milestones from receipt to payment, including assignment and
    /// e-signature steps.
    #[default]
    Pipeline,
    /// Eight dated stages, signature tracked by signed date and payment by
    /// payment date.
    Staged,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Pipeline, Plan::Staged];

    pub fn milestones(&self) -> &'static [MilestoneDef] {
        match self {
            Plan::Pipeline => PIPELINE,
            Plan::Staged => STAGED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plan::Pipeline => "pipeline",
            Plan::Staged => "staged",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Plan {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plan::ALL
            .into_iter()
            .find(|plan| plan.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecordError::UnknownPlan(s.to_string()))
    }
}
