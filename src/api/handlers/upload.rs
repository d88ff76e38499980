use axum::{
    extract::{multipart::Field, Multipart, State},
    http::{header::CONTENT_LENGTH, HeaderMap, StatusCode},
};
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::application::dto::{UploadRequest, UploadedFile};
use crate::application::use_cases::UploadFileUseCase;

/// POST /
/// Multipart upload with `file` and, in private mode, `key`
pub async fn upload_handler(
    State(use_case): State<Arc<UploadFileUseCase>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<(StatusCode, String), ApiError> {
    let limits = ReadLimits {
        max_bytes: use_case.policy().max_file_size_bytes(),
        body_len: declared_body_len(&headers),
    };
    let request = read_upload_form(multipart, limits).await?;

    let receipt = use_case.execute(request).await?;

    Ok((StatusCode::CREATED, format!("{}\n", receipt.url)))
}

#[derive(Debug, Clone, Copy)]
struct ReadLimits {
    max_bytes: u64,
    /// `Content-Length` of the whole form, if the client sent one
    body_len: Option<u64>,
}

impl ReadLimits {
    /// Size to report for a file the body limit cut off after `counted`
    /// bytes. The declared body length is the best estimate of the real
    /// size; the result always fails the size check.
    fn cut_off_size(&self, counted: u64) -> u64 {
        self.body_len
            .unwrap_or(0)
            .max(counted)
            .max(self.max_bytes + 1)
    }
}

fn declared_body_len(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Collect the `key` and first `file` field; other fields are ignored.
async fn read_upload_form(
    mut multipart: Multipart,
    limits: ReadLimits,
) -> Result<UploadRequest, ApiError> {
    let mut request = UploadRequest::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // Limit hit before the file field was reached
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                debug!("Request body limit reached between form fields");
                if request.file.is_none() {
                    request.file = Some(oversized_file(limits));
                }
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "key" => {
                let key = field.text().await?;
                request.key = Some(key).filter(|k| !k.is_empty());
            }
            "file" if request.file.is_none() => {
                let (file, complete) = read_file_field(field, limits).await?;
                request.file = Some(file);
                // The body limit cut the stream short, nothing more to read
                if !complete {
                    break;
                }
            }
            _ => debug!("Ignoring form field '{}'", name),
        }
    }

    Ok(request)
}

/// Stand-in for a file the body limit cut off before any of it was read
fn oversized_file(limits: ReadLimits) -> UploadedFile {
    UploadedFile {
        filename: String::new(),
        data: Bytes::new(),
        size_bytes: limits.cut_off_size(0),
    }
}

/// Buffer the file up to the size limit. Past that the rest is only counted,
/// so the size check can report it without holding it in memory.
///
/// Returns `false` alongside the file when the request body limit ended
/// the stream before the field did.
async fn read_file_field(
    mut field: Field<'_>,
    limits: ReadLimits,
) -> Result<(UploadedFile, bool), ApiError> {
    let max_bytes = limits.max_bytes;
    let filename = field.file_name().unwrap_or_default().to_string();
    let mut buffer = BytesMut::new();
    let mut size_bytes = 0u64;
    let mut complete = true;

    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                size_bytes += chunk.len() as u64;
                if size_bytes <= max_bytes {
                    buffer.extend_from_slice(&chunk);
                } else if !buffer.is_empty() {
                    buffer = BytesMut::new();
                }
            }
            Ok(None) => break,
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                debug!("Request body limit reached while reading '{}'", filename);
                buffer = BytesMut::new();
                size_bytes = limits.cut_off_size(size_bytes);
                complete = false;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!(filename = %filename, size = size_bytes, "Read file field");

    let file = UploadedFile {
        filename,
        data: buffer.freeze(),
        size_bytes,
    };
    Ok((file, complete))
}
