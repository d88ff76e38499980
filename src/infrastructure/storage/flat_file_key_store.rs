use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{KeyStore, KeyStoreError};

/// Upload keys kept one per line in a plain text file.
///
/// The file is re-read on every lookup, so edits apply without a restart.
pub struct FlatFileKeyStore {
    path: PathBuf,
}

impl FlatFileKeyStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All keys in file order, blank lines skipped
    pub async fn list_keys(&self) -> Result<Vec<String>, KeyStoreError> {
        let contents = fs::read_to_string(&self.path).await?;
        Ok(contents
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append `key`. Returns `false` if it was already present.
    pub async fn add_key(&self, key: &str) -> Result<bool, KeyStoreError> {
        validate_key(key)?;

        let mut keys = match self.list_keys().await {
            Ok(keys) => keys,
            Err(KeyStoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };
        if keys.iter().any(|k| k == key) {
            return Ok(false);
        }

        keys.push(key.to_string());
        self.write_keys(&keys).await?;
        Ok(true)
    }

    /// Remove every line equal to `key`. Returns `false` if none matched.
    pub async fn remove_key(&self, key: &str) -> Result<bool, KeyStoreError> {
        let keys = self.list_keys().await?;
        let remaining: Vec<String> = keys.iter().filter(|k| *k != key).cloned().collect();
        if remaining.len() == keys.len() {
            return Ok(false);
        }

        self.write_keys(&remaining).await?;
        Ok(true)
    }

    async fn write_keys(&self, keys: &[String]) -> Result<(), KeyStoreError> {
        let mut contents = keys.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents).await?;
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), KeyStoreError> {
    if key.is_empty() {
        return Err(KeyStoreError::InvalidKey("key must not be empty".to_string()));
    }
    if key.contains(['\n', '\r']) {
        return Err(KeyStoreError::InvalidKey(
            "key must not contain line breaks".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl KeyStore for FlatFileKeyStore {
    async fn lookup_key(&self, key: &str) -> Result<bool, KeyStoreError> {
        let file = File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim_end_matches('\r') == key {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key_store(dir: &TempDir, contents: &str) -> FlatFileKeyStore {
        let path = dir.path().join("keys");
        std::fs::write(&path, contents).unwrap();
        FlatFileKeyStore::new(path)
    }

    #[tokio::test]
    async fn test_lookup_exact_match() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "alpha\nsecret123\nomega\n");

        assert!(store.lookup_key("secret123").await.unwrap());
        assert!(!store.lookup_key("secret").await.unwrap());
        assert!(!store.lookup_key("secret123 ").await.unwrap());
        assert!(!store.lookup_key("SECRET123").await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_last_line_without_newline() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "first\nlast");

        assert!(store.lookup_key("last").await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_crlf_file() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "alpha\r\nbeta\r\n");

        assert!(store.lookup_key("alpha").await.unwrap());
        assert!(store.lookup_key("beta").await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "");

        assert!(!store.lookup_key("anything").await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileKeyStore::new(dir.path().join("absent"));

        assert!(matches!(
            store.lookup_key("secret123").await,
            Err(KeyStoreError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_edits_apply_immediately() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "old\n");
        assert!(!store.lookup_key("new").await.unwrap());

        std::fs::write(store.path(), "new\n").unwrap();

        assert!(store.lookup_key("new").await.unwrap());
        assert!(!store.lookup_key("old").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_and_remove_keys() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "");

        assert!(store.add_key("one").await.unwrap());
        assert!(store.add_key("two").await.unwrap());
        assert!(!store.add_key("one").await.unwrap());
        assert_eq!(store.list_keys().await.unwrap(), vec!["one", "two"]);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "one\ntwo\n");

        assert!(store.remove_key("one").await.unwrap());
        assert!(!store.remove_key("one").await.unwrap());
        assert_eq!(store.list_keys().await.unwrap(), vec!["two"]);
    }

    #[tokio::test]
    async fn test_add_key_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileKeyStore::new(dir.path().join("keys"));

        assert!(store.add_key("first").await.unwrap());
        assert!(store.lookup_key("first").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_key_rejects_malformed_keys() {
        let dir = TempDir::new().unwrap();
        let store = key_store(&dir, "");

        assert!(matches!(
            store.add_key("").await,
            Err(KeyStoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.add_key("two\nkeys").await,
            Err(KeyStoreError::InvalidKey(_))
        ));
    }
}
