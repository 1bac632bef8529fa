use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    Parsing(String),

    #[error("Expected a record object or an array of records, got {0}")]
    Shape(String),

    #[error("Unknown plan '{0}' (expected 'pipeline' or 'staged')")]
    UnknownPlan(String),

    #[error("Unknown policy '{0}' (expected 'first-gap' or 'strict-chain')")]
    UnknownPolicy(String),
}
