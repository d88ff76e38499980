use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{IdError, IdGenerator, KeyStore, StorageError},
    use_cases::{StoreContentUseCase, UploadFileUseCase, UploadPolicy, ValidateKeyUseCase},
};
use crate::config::Config;
use crate::infrastructure::{
    ids::HashidsGenerator,
    storage::{FlatFileKeyStore, LocalFilesystemStore},
};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to initialize storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to initialize ID generator: {0}")]
    IdGenerator(#[from] IdError),

    #[error("{0} not initialized")]
    NotInitialized(&'static str),
}

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    store: Option<Arc<LocalFilesystemStore>>,
    key_store: Option<Arc<dyn KeyStore>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
            key_store: None,
            id_generator: None,
        }
    }

    /// Bootstrap the storage layout and create the filesystem adapters
    pub async fn with_infrastructure(mut self) -> Result<Self, BuildError> {
        let store = LocalFilesystemStore::with_durability(
            self.config.storage_dir.clone(),
            self.config.durable_writes,
        );
        store.init().await?;
        info!("Storage ready at {:?}", self.config.storage_dir);

        let key_store = FlatFileKeyStore::new(store.paths().keys_path());

        self.store = Some(Arc::new(store));
        self.key_store = Some(Arc::new(key_store));
        if self.id_generator.is_none() {
            self.id_generator = Some(Arc::new(HashidsGenerator::new()?));
        }

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Replace the time-based ID generator
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, BuildError> {
        let store = self.store.ok_or(BuildError::NotInitialized("Blob store"))?;
        let key_store = self.key_store.ok_or(BuildError::NotInitialized("Key store"))?;
        let id_generator = self
            .id_generator
            .ok_or(BuildError::NotInitialized("ID generator"))?;

        let policy = UploadPolicy {
            public_upload: self.config.public_upload,
            max_file_size_mb: self.config.max_file_size_mb,
            public_base_url: self.config.public_base_url(),
        };

        let key_validator = Arc::new(ValidateKeyUseCase::new(key_store));
        let content_store = Arc::new(StoreContentUseCase::new(store.clone()));
        let upload_use_case = Arc::new(UploadFileUseCase::new(
            policy,
            key_validator,
            id_generator,
            content_store,
        ));

        info!("Application layer initialized");

        Ok(AppState {
            upload_use_case,
            store,
        })
    }
}
