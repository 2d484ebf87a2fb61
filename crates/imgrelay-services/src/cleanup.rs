//! Temp-file cleanup
//!
//! Staged files must leave the disk on every exit path: after a fully
//! successful upload, after a validation rejection, and after partial upload
//! failure alike. Deletions fan out and settle independently; failures are
//! collected into the in-flight report, never raised, and never replace an
//! earlier error. A failure forces status 500 only when no status is set yet.

use std::path::PathBuf;

use futures::future::join_all;

use imgrelay_core::{CleanupReport, ErrorInfo, RequestFiles, UploadConfig};

/// Delete every temp file attached to the request, across all fields.
///
/// Standalone entry point for callers that staged files but never ran an
/// upload (an aborted handler, a request rejected before orchestration).
pub async fn cleanup_temp_files(files: &RequestFiles) -> CleanupReport {
    let failed = remove_files(all_paths(files)).await;

    let mut report = CleanupReport::default();
    if !failed.is_empty() {
        mark_cleanup_failure(&mut report.error_info, &failed);
        report.is_error = true;
    }
    report
}

/// Merge the outcome of a cleanup pass into an upload report's error info.
/// Returns whether any deletion failed.
pub(crate) async fn run_for_upload(
    files: &RequestFiles,
    config: &UploadConfig,
    error_info: &mut ErrorInfo,
) -> bool {
    let candidates = if config.delete_all_temp_files {
        all_paths(files)
    } else {
        selective_paths(files, config)
    };

    let failed = remove_files(candidates).await;
    if failed.is_empty() {
        return false;
    }
    mark_cleanup_failure(error_info, &failed);
    true
}

/// All attached temp paths, in field insertion order.
fn all_paths(files: &RequestFiles) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for file in files.all_files() {
        push_unique(&mut paths, file.temp_path.clone());
    }
    paths
}

/// Selective mode: the files under the configured field, plus every other
/// attached file that is not an image. Stray non-image junk never lingers
/// even though it was never an upload candidate. Each path is attempted
/// exactly once.
fn selective_paths(files: &RequestFiles, config: &UploadConfig) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for file in files.field(&config.field_name) {
        push_unique(&mut paths, file.temp_path.clone());
    }
    for file in files.all_files() {
        if !file.is_image() {
            push_unique(&mut paths, file.temp_path.clone());
        }
    }
    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

/// Attempt every deletion, settle all, return the paths that failed.
async fn remove_files(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let attempts = paths.into_iter().map(|path| async move {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Temp file deletion failed");
                Some(path)
            }
        }
    });

    join_all(attempts).await.into_iter().flatten().collect()
}

fn mark_cleanup_failure(error_info: &mut ErrorInfo, failed: &[PathBuf]) {
    let joined = failed
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    error_info.status_code_if_unset(500);
    error_info.append_message(&format!(
        " Failed to delete temporarily uploaded files, their paths: {}.",
        joined
    ));
}
