use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::value_objects::{ContentHash, StoredName};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt hash index entry {hash}: {reason}")]
    CorruptIndex { hash: String, reason: String },
}

/// Port for the content-addressed file store.
///
/// The store owns two namespaces: the hash index (content hash -> stored
/// name) and the stored files themselves. Implementations are not required
/// to serialize concurrent writers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Name already recorded for this content, if any
    async fn lookup_hash(&self, hash: &ContentHash) -> Result<Option<StoredName>, StorageError>;

    /// Record that content with `hash` lives under `name`
    async fn record_hash(&self, hash: &ContentHash, name: &StoredName)
        -> Result<(), StorageError>;

    /// Persist file bytes under `name`
    async fn store_bytes(&self, name: &StoredName, data: &[u8]) -> Result<(), StorageError>;
}
