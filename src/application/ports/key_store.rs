use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Port for the upload key allowlist
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Whether `key` is an exact member of the allowlist
    async fn lookup_key(&self, key: &str) -> Result<bool, KeyStoreError>;
}
