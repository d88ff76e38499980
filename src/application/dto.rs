use bytes::Bytes;

use crate::domain::value_objects::{ContentHash, StoredName};

/// Parsed upload form, ready for the upload use case
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// `key` form field, if sent
    pub key: Option<String>,
    /// `file` form field, if sent
    pub file: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as reported by the client
    pub filename: String,
    /// File body. Left empty once `size_bytes` passes the upload limit
    pub data: Bytes,
    /// Observed size of the file field in bytes
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            filename: filename.into(),
            size_bytes: data.len() as u64,
            data,
        }
    }
}

/// Outcome of the content store for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContent {
    pub name: StoredName,
    pub content_hash: ContentHash,
    /// `true` when identical content was already stored and reused
    pub deduplicated: bool,
}

/// Successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub url: String,
    pub stored: StoredContent,
}
