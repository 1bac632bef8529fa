use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::definition::MilestoneDef;
use super::state::MilestoneState;
use crate::error::RecordError;

/// How the "next action" milestone is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NextPolicy {
    /// The earliest milestone that is not done.
    #[default]
    FirstGap,
    /// The earliest chained milestone that is not done. Unchained milestones
    /// (receipt, assignment, sending) are never next, and a missing early
    /// link is next even when later fields are already filled in.
    StrictChain,
}

impl NextPolicy {
    pub const ALL: [NextPolicy; 2] = [NextPolicy::FirstGap, NextPolicy::StrictChain];

    pub fn name(&self) -> &'static str {
        match self {
            NextPolicy::FirstGap => "first-gap",
            NextPolicy::StrictChain => "strict-chain",
        }
    }

    /// Index of the next milestone. `defs` and `states` are parallel.
    pub fn select(&self, defs: &[MilestoneDef], states: &[MilestoneState]) -> Option<usize> {
        match self {
            NextPolicy::FirstGap => states.iter().position(|s| !s.done),
            NextPolicy::StrictChain => defs
                .iter()
                .zip(states)
                .position(|(def, state)| def.chained && !state.done),
        }
    }
}

impl fmt::Display for NextPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for NextPolicy {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NextPolicy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecordError::UnknownPolicy(s.to_string()))
    }
}
