use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Content hash mismatch: expected {expected}, got {actual}")]
    ContentHashMismatch { expected: String, actual: String },

    #[error("Invalid public ID: {0}")]
    InvalidPublicId(String),

    #[error("Invalid stored file name: {0}")]
    InvalidStoredName(String),
}
