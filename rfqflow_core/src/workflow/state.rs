use std::fmt;

use serde::Serialize;

/// Stable identifier of a milestone, used by presenters for list identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKey {
    Received,
    Assigned,
    Quoted,
    Pdf,
    Sent,
    Approved,
    Signed,
    Po,
    Job,
    Invoiced,
    Paid,
}

impl MilestoneKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneKey::Received => "received",
            MilestoneKey::Assigned => "assigned",
            MilestoneKey::Quoted => "quoted",
            MilestoneKey::Pdf => "pdf",
            MilestoneKey::Sent => "sent",
            MilestoneKey::Approved => "approved",
            MilestoneKey::Signed => "signed",
            MilestoneKey::Po => "po",
            MilestoneKey::Job => "job",
            MilestoneKey::Invoiced => "invoiced",
            MilestoneKey::Paid => "paid",
        }
    }
}

impl fmt::Display for MilestoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One milestone as derived for a particular record. Recomputed on every
/// derivation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneState {
    pub key: MilestoneKey,
    pub label: &'static str,
    pub done: bool,
    pub info: Option<String>,
    pub date: Option<String>,
    pub is_next: bool,
}
