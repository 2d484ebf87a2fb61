//! Shared fixtures for the orchestrator integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;

use imgrelay_core::FileHandle;
use imgrelay_storage::{
    classify_cloudinary_error, ConfigErrorKind, DeleteResult, RemoteStore, RemoteStoreError,
    RemoteStoreResult, StoredImage, UploadOptions,
};

/// Route orchestrator tracing through the test harness when RUST_LOG is set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Write `contents` under `name` in `dir` and build the handle the
/// multipart-staging layer would hand over for it.
pub fn stage_file(
    dir: &TempDir,
    field: &str,
    name: &str,
    mime: &str,
    contents: &[u8],
) -> FileHandle {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    FileHandle::new(field, name, mime, contents.len() as u64, path)
}

/// A handle whose temp path was never created on disk, so its cleanup
/// deletion is guaranteed to fail.
pub fn phantom_file(dir: &TempDir, field: &str, name: &str, mime: &str) -> FileHandle {
    FileHandle::new(field, name, mime, 100, dir.path().join(name))
}

/// Remote store double with scripted per-item failures and call counters.
#[derive(Default)]
pub struct ScriptedStore {
    pub upload_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    fail_uploads: HashMap<String, String>,
    fail_deletes: HashMap<String, String>,
    missing_ids: HashSet<String>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail uploads of the file staged under `name` with `raw` provider text.
    pub fn fail_upload(mut self, name: &str, raw: &str) -> Self {
        self.fail_uploads.insert(name.to_string(), raw.to_string());
        self
    }

    /// Fail deletes of `public_id` with `raw` provider text.
    pub fn fail_delete(mut self, public_id: &str, raw: &str) -> Self {
        self.fail_deletes
            .insert(public_id.to_string(), raw.to_string());
        self
    }

    /// Settle deletes of `public_id` as not-found.
    pub fn missing(mut self, public_id: &str) -> Self {
        self.missing_ids.insert(public_id.to_string());
        self
    }
}

#[async_trait]
impl RemoteStore for ScriptedStore {
    async fn upload(
        &self,
        local_path: &Path,
        options: &UploadOptions,
    ) -> RemoteStoreResult<StoredImage> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);

        let name = local_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        if let Some(raw) = self.fail_uploads.get(name) {
            return Err(RemoteStoreError::UploadFailed(raw.clone()));
        }

        let stem = local_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(name);
        let public_id = format!("{}/{}", options.folder, stem);

        Ok(StoredImage {
            secure_url: format!("https://cdn.test/{}", public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> RemoteStoreResult<DeleteResult> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(raw) = self.fail_deletes.get(public_id) {
            return Err(RemoteStoreError::DeleteFailed(raw.clone()));
        }
        if self.missing_ids.contains(public_id) {
            return Ok(DeleteResult::NotFound);
        }
        Ok(DeleteResult::Deleted)
    }

    fn classify_error(&self, err: &RemoteStoreError) -> Option<ConfigErrorKind> {
        classify_cloudinary_error(&err.raw_message())
    }
}
