#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]

pub mod error;
pub mod format;
pub mod record;
pub mod workflow;

pub use error::RecordError;
pub use record::{SigningStatus, WorkflowRecord};
pub use workflow::{Deriver, MilestoneKey, MilestoneState, NextPolicy, Plan, WorkflowProgress, derive};
