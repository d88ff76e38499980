use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::dto::StoredContent;
use crate::application::ports::{BlobStore, StorageError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ContentHash, PublicId, StoredName};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: store content at most once per distinct hash.
///
/// Existing content resolves to the name recorded in the hash index and
/// nothing is written. New content is recorded under `<id><ext>`, index
/// entry first, then the bytes. A failure between the two writes is not
/// rolled back.
pub struct StoreContentUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl StoreContentUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    pub async fn execute(
        &self,
        id: &PublicId,
        original_filename: &str,
        data: &[u8],
    ) -> Result<StoredContent, StoreError> {
        // 1. Hash the full buffer
        let content_hash = ContentHash::compute(data);

        // 2. Reuse an existing entry when the content is already known
        if let Some(name) = self.blob_store.lookup_hash(&content_hash).await? {
            info!(hash = %content_hash, name = %name, "Content already stored, reusing");
            return Ok(StoredContent {
                name,
                content_hash,
                deduplicated: true,
            });
        }

        // 3. New content: index entry, then bytes
        let name = StoredName::for_upload(id, original_filename)?;
        debug!(hash = %content_hash, name = %name, "Recording new content");

        self.blob_store
            .record_hash(&content_hash, &name)
            .await
            .inspect_err(|e| error!("Error while writing hash index entry: {}", e))?;

        self.blob_store
            .store_bytes(&name, data)
            .await
            .inspect_err(|e| error!("Error while writing file {}: {}", name, e))?;

        info!(hash = %content_hash, name = %name, size = data.len(), "Stored new content");

        Ok(StoredContent {
            name,
            content_hash,
            deduplicated: false,
        })
    }
}
