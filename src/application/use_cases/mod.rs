mod store_content;
mod upload_file;
mod validate_key;

pub use store_content::{StoreContentUseCase, StoreError};
pub use upload_file::{UploadError, UploadFileUseCase, UploadPolicy};
pub use validate_key::ValidateKeyUseCase;
