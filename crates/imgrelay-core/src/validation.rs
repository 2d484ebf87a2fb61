//! Upload batch validation
//!
//! The validation ladder applied to a request's files before any remote call
//! is made. Checks run in a fixed order and stop at the first violation: a
//! doomed batch never costs a remote round-trip. This intentionally differs
//! from the orchestrators, which settle every attempt and collect outcomes.

use crate::config::UploadConfig;
use crate::error::ValidationError;
use crate::models::{FileHandle, RequestFiles};

/// Validate an upload batch against `config`.
///
/// Returns the files staged under `config.field_name`, cloned as a snapshot
/// of the batch, or the first violation encountered. Rule order:
///
/// 1. no files attached at all;
/// 2. no file under the required field name;
/// 3. more files than `max_uploads` allows (when configured);
/// 4. per file, in input order: MIME type must be `image/*`; the extension
///    (when the filename has one) must be in `allowed_extensions` (when
///    configured); the size in KB must not exceed `max_file_size_kb` (when
///    configured).
pub fn validate_upload_request(
    files: &RequestFiles,
    config: &UploadConfig,
) -> Result<Vec<FileHandle>, ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoFilesUploaded);
    }

    let batch = files.field(&config.field_name);
    if batch.is_empty() {
        return Err(ValidationError::MissingField {
            field_name: config.field_name.clone(),
        });
    }

    if let Some(limit) = config.max_uploads {
        if batch.len() > limit {
            return Err(ValidationError::TooManyFiles { limit });
        }
    }

    for file in batch {
        if !file.is_image() {
            return Err(ValidationError::NotAnImage);
        }

        if let (Some(allowed), Some(extension)) = (&config.allowed_extensions, file.extension()) {
            if !allowed.iter().any(|candidate| candidate == extension) {
                return Err(ValidationError::DisallowedExtension {
                    allowed: allowed.clone(),
                });
            }
        }

        if let Some(limit_kb) = config.max_file_size_kb {
            if file.size_bytes / 1024 > limit_kb {
                return Err(ValidationError::FileTooLarge { limit_kb });
            }
        }
    }

    Ok(batch.to_vec())
}
