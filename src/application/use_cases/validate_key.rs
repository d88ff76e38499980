use std::sync::Arc;
use tracing::error;

use crate::application::ports::KeyStore;

/// Use case: check an upload key against the allowlist.
///
/// Fails closed: a store that cannot be read accepts nothing.
pub struct ValidateKeyUseCase {
    key_store: Arc<dyn KeyStore>,
}

impl ValidateKeyUseCase {
    pub fn new(key_store: Arc<dyn KeyStore>) -> Self {
        Self { key_store }
    }

    pub async fn is_valid(&self, key: &str) -> bool {
        match self.key_store.lookup_key(key).await {
            Ok(valid) => valid,
            Err(e) => {
                error!("Error while reading the upload key list: {}", e);
                false
            }
        }
    }
}
