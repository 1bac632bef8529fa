use serde::Serialize;
use tracing::debug;

use super::definition::Plan;
use super::policy::NextPolicy;
use super::state::{MilestoneKey, MilestoneState};
use crate::format::{self, DateStyle};
use crate::record::WorkflowRecord;

/// Derived progress of one record. A projection of the record, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowProgress {
    pub plan: Plan,
    pub policy: NextPolicy,
    pub milestones: Vec<MilestoneState>,
    pub next: Option<MilestoneKey>,
    pub completed_count: usize,
    pub total: usize,
    pub remaining: usize,
    pub progress_percent: u8,
    pub complete: bool,
}

impl WorkflowProgress {
    pub fn milestone(&self, key: MilestoneKey) -> Option<&MilestoneState> {
        self.milestones.iter().find(|m| m.key == key)
    }

    pub fn next_milestone(&self) -> Option<&MilestoneState> {
        self.milestones.iter().find(|m| m.is_next)
    }
}

/// Turns records into [`WorkflowProgress`] for a given plan and policy.
///
/// Holds no state beyond its configuration, so one deriver can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deriver {
    plan: Plan,
    policy: NextPolicy,
}

impl Deriver {
    pub fn new(plan: Plan, policy: NextPolicy) -> Self {
        Self { plan, policy }
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn policy(&self) -> NextPolicy {
        self.policy
    }

    pub fn derive(&self, record: &WorkflowRecord) -> WorkflowProgress {
        let defs = self.plan.milestones();

        let mut milestones: Vec<MilestoneState> = defs
            .iter()
            .map(|def| MilestoneState {
                key: def.key,
                label: def.label,
                done: def.done.holds(record),
                info: def.info.render(record),
                date: def
                    .date
                    .and_then(|field| record.text(field))
                    .and_then(|raw| format::format_date(raw, DateStyle::Long)),
                is_next: false,
            })
            .collect();

        let next_index = self.policy.select(defs, &milestones);
        let next = match next_index.and_then(|i| milestones.get_mut(i)) {
            Some(state) => {
                state.is_next = true;
                Some(state.key)
            }
            None => None,
        };

        let completed_count = milestones.iter().filter(|m| m.done).count();
        let total = milestones.len();

        debug!(
            record = %record.display_name(),
            plan = %self.plan,
            policy = %self.policy,
            completed_count,
            total,
            next = next.map(|k| k.as_str()).unwrap_or("none"),
            "derived workflow progress"
        );

        WorkflowProgress {
            plan: self.plan,
            policy: self.policy,
            milestones,
            next,
            completed_count,
            total,
            remaining: total.saturating_sub(completed_count),
            progress_percent: progress_percent(completed_count, total),
            complete: next.is_none(),
        }
    }
}

/// Derives with the default plan (pipeline) and policy (first gap).
pub fn derive(record: &WorkflowRecord) -> WorkflowProgress {
    Deriver::default().derive(record)
}

/// `round(100 * completed / total)`, halves rounded up.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    let completed = completed.min(total);
    let percent = (200 * completed + total) / (2 * total).max(1);
    u8::try_from(percent).unwrap_or(100)
}
