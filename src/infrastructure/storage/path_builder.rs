use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, StoredName};

const FILES_DIR: &str = "files";
const HASHES_DIR: &str = "hashes";
const TEMP_DIR: &str = "tmp";
const KEYS_FILE: &str = "keys";

/// Utility for generating storage paths
///
/// ```text
/// <root>/keys
/// <root>/files/<name>
/// <root>/hashes/<hex>
/// <root>/tmp/<uuid>
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files_dir(&self) -> PathBuf {
        self.root.join(FILES_DIR)
    }

    pub fn hashes_dir(&self) -> PathBuf {
        self.root.join(HASHES_DIR)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIR)
    }

    pub fn keys_path(&self) -> PathBuf {
        self.root.join(KEYS_FILE)
    }

    /// Stored file: /root/files/{name}
    pub fn file_path(&self, name: &StoredName) -> PathBuf {
        self.files_dir().join(name.as_str())
    }

    /// Hash index entry: /root/hashes/{hash}
    pub fn hash_path(&self, hash: &ContentHash) -> PathBuf {
        self.hashes_dir().join(hash.as_hex())
    }

    /// Temp upload path: /root/tmp/{uuid}
    pub fn temp_path(&self, id: uuid::Uuid) -> PathBuf {
        self.temp_dir().join(id.to_string())
    }
}
