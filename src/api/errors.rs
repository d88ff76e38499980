use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::use_cases::{StoreError, UploadError};

/// API error response, rendered as a plain-text line
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, format!("{}\n", self.message)).into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::new(err.status(), err.body_text())
    }
}

// Convert use case errors to API errors

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingKey => ApiError::new(StatusCode::UNAUTHORIZED, err.to_string()),
            UploadError::InvalidKey => ApiError::new(StatusCode::FORBIDDEN, err.to_string()),
            UploadError::MissingFile => ApiError::bad_request(err.to_string()),
            UploadError::TooLarge { .. } => {
                ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            UploadError::Store(StoreError::Domain(e)) => {
                ApiError::bad_request(format!("Unusable file name: {}", e))
            }
            // Details stay in the server log
            UploadError::IdGeneration(_) | UploadError::Store(StoreError::Storage(_)) => {
                error!("Upload failed: {}", err);
                ApiError::internal_error("Upload failed, please try again later")
            }
        }
    }
}
