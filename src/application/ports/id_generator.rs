#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::PublicId;

#[derive(Debug, Error)]
pub enum IdError {
    #[error("Failed to build ID encoder: {0}")]
    Build(String),

    #[error("Generated ID rejected: {0}")]
    Domain(#[from] DomainError),
}

/// Port for public upload identifiers
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<PublicId, IdError>;
}
