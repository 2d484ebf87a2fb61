//! Batch upload orchestration
//!
//! Validates the staged files as a batch, fans one upload per file out to the
//! remote store, folds the settled outcomes into a single [`UploadReport`],
//! and always deletes the local temp files before returning. Validation is
//! the only fail-fast stage; once uploads start, every file gets its attempt
//! regardless of how its siblings fare, and partial successes stay recorded
//! even when the batch as a whole is reported as an error.

use futures::future::join_all;

use imgrelay_core::{
    validate_upload_request, FileHandle, RequestFiles, UploadConfig, UploadReport, UploadedImage,
};
use imgrelay_storage::{ConfigErrorKind, RemoteStore, StoredImage, UploadOptions};

use crate::cleanup;

/// Per-file settlement of one upload attempt.
enum UploadOutcome {
    Success(StoredImage),
    Failure(Option<ConfigErrorKind>),
}

/// Upload a request's staged image files to the remote store.
///
/// Returns a report, never an error: validation violations, per-file upload
/// failures, and temp-file deletion failures all surface as report data with
/// the appropriate status code. Successful uploads are listed in
/// `images_info` in input order.
pub async fn upload_images(
    store: &dyn RemoteStore,
    files: &RequestFiles,
    config: &UploadConfig,
) -> UploadReport {
    let mut report = match validate_upload_request(files, config) {
        Ok(batch) => run_uploads(store, &batch, config).await,
        Err(violation) => {
            tracing::warn!(
                field = %config.field_name,
                status = violation.status_code(),
                "Upload batch rejected: {}",
                violation
            );
            UploadReport::error(violation.status_code(), violation.to_string())
        }
    };

    // The cleanup guarantee: temp files leave the disk on every exit path
    if cleanup::run_for_upload(files, config, &mut report.error_info).await {
        report.is_error = true;
    }

    report
}

async fn run_uploads(
    store: &dyn RemoteStore,
    batch: &[FileHandle],
    config: &UploadConfig,
) -> UploadReport {
    let attempts = batch.iter().map(|file| async move {
        let options = if config.use_source_file_name {
            UploadOptions::from_source_name(&config.folder, &file.original_name)
        } else {
            UploadOptions::generated(&config.folder)
        };

        match store.upload(&file.temp_path, &options).await {
            Ok(stored) => {
                tracing::info!(
                    file = %file.original_name,
                    public_id = %stored.public_id,
                    "Remote upload successful"
                );
                UploadOutcome::Success(stored)
            }
            Err(err) => {
                tracing::warn!(
                    file = %file.original_name,
                    error = %err,
                    "Remote upload failed"
                );
                UploadOutcome::Failure(store.classify_error(&err))
            }
        }
    });

    // Settle all attempts; join_all yields outcomes positionally, so the
    // successes below land in input order.
    let outcomes = join_all(attempts).await;

    let mut report = UploadReport::default();
    let mut failed_count = 0usize;
    let mut config_error: Option<ConfigErrorKind> = None;

    for outcome in outcomes {
        match outcome {
            UploadOutcome::Success(stored) => report.images_info.push(UploadedImage {
                image_src: stored.secure_url,
                image_public_id: stored.public_id,
            }),
            UploadOutcome::Failure(kind) => {
                failed_count += 1;
                // Keep the first classified configuration error
                if config_error.is_none() {
                    config_error = kind;
                }
            }
        }
    }

    if failed_count > 0 {
        let image = if failed_count == 1 { "image" } else { "images" };
        let mut message = format!("Failed to upload {} {}.", failed_count, image);
        if let Some(kind) = config_error {
            message.push(' ');
            message.push_str(kind.message());
        }

        report.is_error = true;
        report.error_info.status_code = Some(500);
        report.error_info.message = Some(message);
    }

    report
}
