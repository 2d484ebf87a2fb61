//! Batch delete orchestration
//!
//! Fans one delete per public id out to the remote store, settles all
//! attempts, and folds the outcomes into a single [`DeleteReport`]. Each
//! settlement is one of deleted, not-found, or failed; duplicate ids get
//! independent attempts. The composed message names the ids in each class; a
//! recognized configuration error replaces all of that with its own text.

use futures::future::join_all;

use imgrelay_core::DeleteReport;
use imgrelay_storage::{ConfigErrorKind, DeleteResult, RemoteStore};

/// Per-id settlement of one delete attempt.
enum DeleteOutcome {
    Deleted(String),
    NotFound(String),
    Failure {
        public_id: String,
        config_error: Option<ConfigErrorKind>,
    },
}

/// Delete a single stored image by public id.
pub async fn delete_image(store: &dyn RemoteStore, public_id: &str) -> DeleteReport {
    delete_images(store, &[public_id.to_string()]).await
}

/// Delete a batch of stored images by public id.
///
/// Returns a report, never an error. Status code: 404 when any id was not
/// found, 500 when any call failed (overriding 404), none when everything
/// was deleted or a configuration error suppressed the composition.
pub async fn delete_images(store: &dyn RemoteStore, public_ids: &[String]) -> DeleteReport {
    let attempts = public_ids.iter().map(|public_id| async move {
        match store.delete(public_id).await {
            Ok(DeleteResult::Deleted) => DeleteOutcome::Deleted(public_id.clone()),
            Ok(DeleteResult::NotFound) => DeleteOutcome::NotFound(public_id.clone()),
            Err(err) => {
                tracing::warn!(
                    public_id = %public_id,
                    error = %err,
                    "Remote delete failed"
                );
                DeleteOutcome::Failure {
                    public_id: public_id.clone(),
                    config_error: store.classify_error(&err),
                }
            }
        }
    });

    let outcomes = join_all(attempts).await;

    let mut deleted = Vec::new();
    let mut not_found = Vec::new();
    let mut errored = Vec::new();
    let mut config_error: Option<ConfigErrorKind> = None;

    for outcome in outcomes {
        match outcome {
            DeleteOutcome::Deleted(id) => deleted.push(id),
            DeleteOutcome::NotFound(id) => not_found.push(id),
            DeleteOutcome::Failure {
                public_id,
                config_error: kind,
            } => {
                errored.push(public_id);
                // Keep the first classified configuration error
                if config_error.is_none() {
                    config_error = kind;
                }
            }
        }
    }

    let mut report = DeleteReport::default();
    if config_error.is_none() && not_found.is_empty() && errored.is_empty() {
        return report;
    }
    report.is_error = true;

    // Misconfiguration is the only thing worth telling the caller about;
    // per-id classification text is suppressed.
    if let Some(kind) = config_error {
        report.error_info.message = Some(kind.message().to_string());
        return report;
    }

    let mut message = String::new();

    if !deleted.is_empty() {
        message.push_str(&format!(
            "Successfully deleted {} with {}: {}. ",
            noun(deleted.len(), "image", "images"),
            noun(deleted.len(), "public_id", "public_ids"),
            deleted.join(", ")
        ));
    }

    if !not_found.is_empty() {
        message.push_str(&format!(
            "Couldn't find {} in the remote store with {}: {}. ",
            noun(not_found.len(), "image", "images"),
            noun(not_found.len(), "public_id", "public_ids"),
            not_found.join(", ")
        ));
        report.error_info.status_code = Some(404);
    }

    if !errored.is_empty() {
        message.push_str(&format!(
            "Because of server error, couldn't delete {} with {}: {}. ",
            noun(errored.len(), "image", "images"),
            noun(errored.len(), "public_id", "public_ids"),
            errored.join(", ")
        ));
        report.error_info.status_code = Some(500);
    }

    report.error_info.message = Some(message.trim_end().to_string());
    report
}

fn noun(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
