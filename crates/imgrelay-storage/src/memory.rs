//! In-memory remote store backend
//!
//! Holds stored images in a map instead of talking to a provider. Used by the
//! orchestrator tests and handy for local development; it honors the same
//! naming options and credential checks a real adapter would, and reports
//! misconfiguration with the provider's canonical messages so classification
//! stays exercised end to end.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use imgrelay_core::RemoteConfig;

use crate::classifier::{classify_cloudinary_error, ConfigErrorKind};
use crate::traits::{
    DeleteResult, RemoteStore, RemoteStoreError, RemoteStoreResult, StoredImage, UploadOptions,
};

/// Remote store backend keeping stored images in memory.
pub struct MemoryRemoteStore {
    config: RemoteConfig,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryRemoteStore {
    /// Backend with complete (dummy) credentials.
    pub fn new() -> Self {
        Self::with_config(RemoteConfig::new("memory", "key", "secret"))
    }

    /// Backend gated on `config`; incomplete credentials make every call
    /// fail with the provider's canonical "Must supply …" message.
    pub fn with_config(config: RemoteConfig) -> Self {
        MemoryRemoteStore {
            config,
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Number of images currently stored.
    pub async fn stored_count(&self) -> usize {
        self.objects.lock().await.len()
    }

    /// Whether an image is stored under `public_id`.
    pub async fn contains(&self, public_id: &str) -> bool {
        self.objects.lock().await.contains_key(public_id)
    }

    /// Seed an image directly, bypassing upload. Test convenience.
    pub async fn insert(&self, public_id: impl Into<String>, data: Vec<u8>) {
        self.objects.lock().await.insert(public_id.into(), data);
    }

    fn generate_url(public_id: &str) -> String {
        format!("mem://{}", public_id)
    }
}

impl Default for MemoryRemoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn upload(
        &self,
        local_path: &Path,
        options: &UploadOptions,
    ) -> RemoteStoreResult<StoredImage> {
        if let Some(missing) = self.config.missing_setting() {
            return Err(RemoteStoreError::UploadFailed(missing.to_string()));
        }

        let data = tokio::fs::read(local_path).await.map_err(|e| {
            RemoteStoreError::UploadFailed(format!(
                "Failed to read staged file {}: {}",
                local_path.display(),
                e
            ))
        })?;
        let size = data.len();

        let public_id = match &options.public_id {
            Some(name) => format!("{}/{}", options.folder, name),
            None => format!("{}/{}", options.folder, Uuid::new_v4().simple()),
        };

        let mut objects = self.objects.lock().await;
        if objects.contains_key(&public_id) && !options.overwrite {
            return Err(RemoteStoreError::UploadFailed(format!(
                "public_id {} already exists and overwrite is disabled",
                public_id
            )));
        }
        objects.insert(public_id.clone(), data);

        let secure_url = Self::generate_url(&public_id);

        tracing::info!(
            path = %local_path.display(),
            public_id = %public_id,
            size_bytes = size,
            "Memory store upload successful"
        );

        Ok(StoredImage {
            secure_url,
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> RemoteStoreResult<DeleteResult> {
        if let Some(missing) = self.config.missing_setting() {
            return Err(RemoteStoreError::DeleteFailed(missing.to_string()));
        }

        let removed = self.objects.lock().await.remove(public_id).is_some();

        tracing::info!(
            public_id = %public_id,
            found = removed,
            "Memory store delete settled"
        );

        if removed {
            Ok(DeleteResult::Deleted)
        } else {
            Ok(DeleteResult::NotFound)
        }
    }

    fn classify_error(&self, err: &RemoteStoreError) -> Option<ConfigErrorKind> {
        classify_cloudinary_error(&err.raw_message())
    }
}
