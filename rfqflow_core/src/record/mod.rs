mod lenient;
pub mod rfq;

pub use rfq::{
    Field, SigningStatus, WorkflowRecord, records_from_json_str, records_from_value,
    records_from_yaml_str,
};
