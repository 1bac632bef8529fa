pub mod conditions;
pub mod definition;
pub mod engine;
pub mod policy;
mod property_tests;
pub mod state;

pub use conditions::{Condition, Info};
pub use definition::{MilestoneDef, Plan};
pub use engine::{Deriver, WorkflowProgress, derive, progress_percent};
pub use policy::NextPolicy;
pub use state::{MilestoneKey, MilestoneState};
