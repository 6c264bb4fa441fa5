use consent_filter_sdk::{MissingFieldError, RecordStoreError};

/// Errors that abort a policy run.
///
/// Every variant is fatal: no output is written once one is raised.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("record store failure: {0}")]
    Store(#[from] RecordStoreError),

    #[error("invalid consent filter configuration: {reason}")]
    InvalidConfig { reason: String },
}
