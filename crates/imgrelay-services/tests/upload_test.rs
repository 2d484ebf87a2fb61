//! Batch upload orchestration tests

mod helpers;

use std::sync::atomic::Ordering;

use tempfile::tempdir;

use helpers::{phantom_file, stage_file, ScriptedStore};
use imgrelay_core::{RequestFiles, UploadConfig};
use imgrelay_services::upload_images;
use imgrelay_storage::MemoryRemoteStore;

fn config() -> UploadConfig {
    UploadConfig::new("avatar", "avatars")
}

#[tokio::test]
async fn test_successful_batch_uploads_everything_and_cleans_up() {
    helpers::init_tracing();

    let dir = tempdir().unwrap();
    let a = stage_file(&dir, "avatar", "a.png", "image/png", b"aaa");
    let b = stage_file(&dir, "avatar", "b.png", "image/png", b"bbb");
    let files: RequestFiles = [a.clone(), b.clone()].into_iter().collect();

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &config()).await;

    assert!(!report.is_error);
    assert_eq!(report.error_info.status_code, None);
    assert_eq!(report.error_info.message, None);
    assert_eq!(report.images_info.len(), 2);
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 2);

    let ids: Vec<_> = report
        .images_info
        .iter()
        .map(|image| image.image_public_id.as_str())
        .collect();
    assert!(ids.contains(&"avatars/a"));
    assert!(ids.contains(&"avatars/b"));

    // The cleanup guarantee: both temp files are gone
    assert!(!a.temp_path.exists());
    assert!(!b.temp_path.exists());
}

#[tokio::test]
async fn test_empty_request_rejected_without_remote_calls() {
    let files = RequestFiles::new();
    let store = ScriptedStore::new();

    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(404));
    assert_eq!(
        report.error_info.message.as_deref(),
        Some("You have not uploaded any file")
    );
    assert!(report.images_info.is_empty());
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_field_rejected_and_temp_file_still_deleted() {
    let dir = tempdir().unwrap();
    let stray = stage_file(&dir, "banner", "stray.png", "image/png", b"sss");
    let files: RequestFiles = [stray.clone()].into_iter().collect();

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(404));
    assert_eq!(
        report.error_info.message.as_deref(),
        Some("No file has correct field name. The field name has to be avatar")
    );
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 0);
    assert!(!stray.temp_path.exists());
}

#[tokio::test]
async fn test_batch_over_limit_rejected_without_remote_calls() {
    let dir = tempdir().unwrap();
    let files: RequestFiles = (0..3)
        .map(|i| stage_file(&dir, "avatar", &format!("{}.png", i), "image/png", b"x"))
        .collect();

    let mut cfg = config();
    cfg.max_uploads = Some(2);

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &cfg).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(400));
    assert!(report.error_info.message.as_deref().unwrap().contains("2"));
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validation_failure_still_cleans_up() {
    let dir = tempdir().unwrap();
    let pdf = stage_file(&dir, "avatar", "doc.pdf", "application/pdf", b"pdf");
    let files: RequestFiles = [pdf.clone()].into_iter().collect();

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(415));
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 0);
    assert!(!pdf.temp_path.exists());
}

#[tokio::test]
async fn test_partial_failure_keeps_successes() {
    let dir = tempdir().unwrap();
    let a = stage_file(&dir, "avatar", "a.png", "image/png", b"aaa");
    let b = stage_file(&dir, "avatar", "b.png", "image/png", b"bbb");
    let c = stage_file(&dir, "avatar", "c.png", "image/png", b"ccc");
    let files: RequestFiles = [a.clone(), b.clone(), c.clone()].into_iter().collect();

    let store = ScriptedStore::new().fail_upload("b.png", "remote exploded");
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(500));
    assert_eq!(
        report.error_info.message.as_deref(),
        Some("Failed to upload 1 image.")
    );
    // Partial successes are not rolled back
    assert_eq!(report.images_info.len(), 2);
    assert_eq!(store.upload_calls.load(Ordering::SeqCst), 3);

    // All three temp files are gone regardless
    assert!(!a.temp_path.exists());
    assert!(!b.temp_path.exists());
    assert!(!c.temp_path.exists());
}

#[tokio::test]
async fn test_configuration_error_is_surfaced() {
    let dir = tempdir().unwrap();
    let a = stage_file(&dir, "avatar", "a.png", "image/png", b"aaa");
    let b = stage_file(&dir, "avatar", "b.png", "image/png", b"bbb");
    let files: RequestFiles = [a, b].into_iter().collect();

    let store = ScriptedStore::new()
        .fail_upload("a.png", "Must supply api_key")
        .fail_upload("b.png", "Must supply api_key");
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(500));
    assert_eq!(
        report.error_info.message.as_deref(),
        Some("Failed to upload 2 images. Cloudinary configuration error: You must provide API key.")
    );
}

#[tokio::test]
async fn test_cleanup_failure_marks_successful_report() {
    let dir = tempdir().unwrap();
    // Never staged on disk; the remote upload succeeds but cleanup cannot
    let ghost = phantom_file(&dir, "avatar", "ghost.png", "image/png");
    let files: RequestFiles = [ghost.clone()].into_iter().collect();

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(500));
    assert_eq!(report.images_info.len(), 1);

    let message = report.error_info.message.unwrap();
    assert!(message.starts_with("Failed to delete temporarily uploaded files, their paths:"));
    assert!(message.contains(&ghost.temp_path.display().to_string()));
}

#[tokio::test]
async fn test_cleanup_failure_appends_to_upload_error() {
    let dir = tempdir().unwrap();
    let ghost = phantom_file(&dir, "avatar", "ghost.png", "image/png");
    let files: RequestFiles = [ghost].into_iter().collect();

    let store = ScriptedStore::new().fail_upload("ghost.png", "remote exploded");
    let report = upload_images(&store, &files, &config()).await;

    assert!(report.is_error);
    assert_eq!(report.error_info.status_code, Some(500));

    let message = report.error_info.message.unwrap();
    assert!(message.starts_with("Failed to upload 1 image."));
    assert!(message.contains("Failed to delete temporarily uploaded files, their paths:"));
}

#[tokio::test]
async fn test_selective_cleanup_spares_unrelated_images() {
    let dir = tempdir().unwrap();
    let avatar = stage_file(&dir, "avatar", "a.png", "image/png", b"aaa");
    let junk = stage_file(&dir, "doc", "junk.txt", "text/plain", b"junk");
    let keeper = stage_file(&dir, "gallery", "keep.png", "image/png", b"keep");
    let files: RequestFiles = [avatar.clone(), junk.clone(), keeper.clone()]
        .into_iter()
        .collect();

    let mut cfg = config();
    cfg.delete_all_temp_files = false;

    let store = ScriptedStore::new();
    let report = upload_images(&store, &files, &cfg).await;

    assert!(!report.is_error);
    // Target-field file and the non-image stray are deleted; the image
    // under an unrelated field survives selective mode.
    assert!(!avatar.temp_path.exists());
    assert!(!junk.temp_path.exists());
    assert!(keeper.temp_path.exists());
}

#[tokio::test]
async fn test_end_to_end_with_memory_store() {
    let dir = tempdir().unwrap();
    let a = stage_file(&dir, "avatar", "a.png", "image/png", b"pixels");
    let files: RequestFiles = [a.clone()].into_iter().collect();

    let store = MemoryRemoteStore::new();
    let mut cfg = config();
    cfg.use_source_file_name = true;

    let report = upload_images(&store, &files, &cfg).await;

    assert!(!report.is_error);
    assert_eq!(report.images_info.len(), 1);
    assert_eq!(report.images_info[0].image_public_id, "avatars/a");
    assert!(store.contains("avatars/a").await);
    assert!(!a.temp_path.exists());
}
