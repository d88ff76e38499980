use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::dto::{UploadReceipt, UploadRequest};
use crate::application::ports::{IdError, IdGenerator};
use crate::application::use_cases::{StoreContentUseCase, StoreError, ValidateKeyUseCase};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Public uploading is currently disabled, an upload key is required")]
    MissingKey,

    #[error("Incorrect upload key")]
    InvalidKey,

    #[error("No file field in upload form")]
    MissingFile,

    #[error(
        "The maximum file size is currently {}MB, you uploaded a {}MB file",
        .max_mb,
        display_mib(.size_bytes)
    )]
    TooLarge { max_mb: u64, size_bytes: u64 },

    #[error("ID generation failed: {0}")]
    IdGeneration(#[from] IdError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn display_mib(bytes: &u64) -> String {
    format!("{:.2}", *bytes as f64 / (1u64 << 20) as f64)
}

/// Upload gating settings, fixed at startup
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub public_upload: bool,
    pub max_file_size_mb: u64,
    /// `http://host:port`, no trailing slash
    pub public_base_url: String,
}

impl UploadPolicy {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb << 20
    }
}

/// Use case: accept an upload and hand back its public URL
///
/// `Received -> KeyCheck (private mode) -> SizeCheck -> Dedup/Store -> Respond`
pub struct UploadFileUseCase {
    policy: UploadPolicy,
    key_validator: Arc<ValidateKeyUseCase>,
    id_generator: Arc<dyn IdGenerator>,
    content_store: Arc<StoreContentUseCase>,
}

impl UploadFileUseCase {
    pub fn new(
        policy: UploadPolicy,
        key_validator: Arc<ValidateKeyUseCase>,
        id_generator: Arc<dyn IdGenerator>,
        content_store: Arc<StoreContentUseCase>,
    ) -> Self {
        Self {
            policy,
            key_validator,
            id_generator,
            content_store,
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Execute upload workflow
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadReceipt, UploadError> {
        info!("File upload initiated");

        // 1. Key gate (private mode only)
        if !self.policy.public_upload {
            let key = request
                .key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(UploadError::MissingKey)?;

            if !self.key_validator.is_valid(key).await {
                warn!("Upload rejected: incorrect key");
                return Err(UploadError::InvalidKey);
            }
        }

        let file = request.file.ok_or(UploadError::MissingFile)?;
        info!(filename = %file.filename, size = file.size_bytes, "Received file");

        // 2. Size gate
        if file.size_bytes > self.policy.max_file_size_bytes() {
            warn!(
                size = file.size_bytes,
                max = self.policy.max_file_size_bytes(),
                "Upload rejected: file too large"
            );
            return Err(UploadError::TooLarge {
                max_mb: self.policy.max_file_size_mb,
                size_bytes: file.size_bytes,
            });
        }

        // 3. Fresh public ID
        let id = self
            .id_generator
            .generate()
            .inspect_err(|e| error!("Error while creating public ID: {}", e))?;

        // 4. Dedup and store
        let stored = self
            .content_store
            .execute(&id, &file.filename, &file.data)
            .await?;

        // 5. Public location. The extension is client supplied, so the name
        // goes out as an encoded path segment.
        let url = format!(
            "{}/storage/{}",
            self.policy.public_base_url,
            urlencoding::encode(stored.name.as_str())
        );

        Ok(UploadReceipt { url, stored })
    }
}
