use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::{ContentHash, StoredName};
use crate::infrastructure::storage::PathBuilder;

/// Local filesystem blob store with a flat-file hash index
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_durability(root, true)
    }

    pub fn with_durability(root: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            durable_writes,
        }
    }

    pub fn paths(&self) -> &PathBuilder {
        &self.path_builder
    }

    /// Initialize storage directories and the key file.
    ///
    /// Safe to run on every start: existing directories are kept and an
    /// existing key file is never truncated.
    pub async fn init(&self) -> Result<(), StorageError> {
        let root = self.path_builder.root();
        if fs::metadata(root).await.is_err() {
            info!("Creating storage directory {:?}", root);
        }

        fs::create_dir_all(self.path_builder.files_dir()).await?;
        fs::create_dir_all(self.path_builder.hashes_dir()).await?;
        fs::create_dir_all(self.path_builder.temp_dir()).await?;

        // create(true) without truncate keeps whatever keys are already there
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_builder.keys_path())
            .await?;

        Ok(())
    }

    /// Whether the directories requests depend on are present
    pub async fn layout_ready(&self) -> bool {
        let files = fs::metadata(self.path_builder.files_dir()).await;
        let hashes = fs::metadata(self.path_builder.hashes_dir()).await;
        matches!((files, hashes), (Ok(f), Ok(h)) if f.is_dir() && h.is_dir())
    }

    /// Write `data` to a temp file, then rename it over `dest`.
    async fn write_atomic(&self, dest: &Path, data: &[u8]) -> Result<(), StorageError> {
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());
        debug!("Writing {} bytes via temp file {:?}", data.len(), temp_path);

        if let Err(e) = self.write_temp(&temp_path, data).await {
            warn!("Failed to write temp file {:?}: {}", temp_path, e);
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, dest).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(e));
        }

        // Persist the rename itself when durability is required
        if self.durable_writes {
            if let Some(parent) = dest.parent() {
                match File::open(parent).await {
                    Ok(parent_file) => {
                        if let Err(e) = parent_file.sync_all().await {
                            warn!("Failed to sync parent directory after rename: {}", e);
                        }
                    }
                    Err(e) => {
                        warn!("Failed to open parent directory for sync: {}", e);
                    }
                }
            }
        }

        Ok(())
    }

    async fn write_temp(&self, temp_path: &Path, data: &[u8]) -> Result<(), StorageError> {
        let mut file = File::create(temp_path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        if self.durable_writes {
            file.sync_all().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalFilesystemStore {
    async fn lookup_hash(&self, hash: &ContentHash) -> Result<Option<StoredName>, StorageError> {
        let path = self.path_builder.hash_path(hash);

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };

        // Entries are written as "<name>\n"
        let name = StoredName::parse(contents.trim()).map_err(|e| StorageError::CorruptIndex {
            hash: hash.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(name))
    }

    async fn record_hash(&self, hash: &ContentHash, name: &StoredName) -> Result<(), StorageError> {
        let path = self.path_builder.hash_path(hash);
        self.write_atomic(&path, format!("{}\n", name).as_bytes()).await
    }

    async fn store_bytes(&self, name: &StoredName, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path_builder.file_path(name);
        self.write_atomic(&path, data).await
    }
}
