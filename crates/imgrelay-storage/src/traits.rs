//! Remote store abstraction trait
//!
//! This module defines the RemoteStore trait every remote media-store backend
//! must implement. The orchestrators depend only on this contract, never on a
//! specific provider SDK.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ConfigErrorKind;

/// Remote store operation errors
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Remote store configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemoteStoreError {
    /// The provider's raw error text, used by configuration-error
    /// classification. Providers report misconfiguration either as a bare
    /// string or as an error object; both end up here as the inner message.
    pub fn raw_message(&self) -> String {
        match self {
            RemoteStoreError::UploadFailed(msg)
            | RemoteStoreError::DeleteFailed(msg)
            | RemoteStoreError::Config(msg) => msg.clone(),
            RemoteStoreError::Io(err) => err.to_string(),
        }
    }
}

/// Result type for remote store operations
pub type RemoteStoreResult<T> = Result<T, RemoteStoreError>;

/// Naming and placement options for one upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Destination folder on the remote store
    pub folder: String,
    /// Derive the remote name from the local temp file name. Always false:
    /// staging layers assign meaningless temp names.
    pub use_filename: bool,
    /// Let the store append unique random text to the remote name
    pub unique_filename: bool,
    /// Allow replacing an existing remote object with the same name
    pub overwrite: bool,
    /// Explicit remote name to request, when not store-generated
    pub public_id: Option<String>,
}

impl UploadOptions {
    /// Store-generated naming: the remote store invents a unique name and
    /// overwriting is impossible.
    pub fn generated(folder: impl Into<String>) -> Self {
        UploadOptions {
            folder: folder.into(),
            use_filename: false,
            unique_filename: true,
            overwrite: false,
            public_id: None,
        }
    }

    /// Source-file naming: the remote object is named after the original
    /// filename's stem, uniquification is disabled, and an existing object
    /// of that name is overwritten.
    pub fn from_source_name(folder: impl Into<String>, original_name: &str) -> Self {
        let stem = Path::new(original_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(original_name);

        UploadOptions {
            folder: folder.into(),
            use_filename: false,
            unique_filename: false,
            overwrite: true,
            public_id: Some(stem.to_string()),
        }
    }
}

/// A successfully stored image, as reported by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Public URL of the stored image
    pub secure_url: String,
    /// The store's unique identifier, used for later deletion
    pub public_id: String,
}

/// Settled result of a delete call that did not raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResult {
    /// The store removed the image
    Deleted,
    /// The store reported "not found" for the public id
    NotFound,
}

/// Abstract remote media store.
///
/// Every call is independently fallible and attempted exactly once: no
/// retries, no timeout. A hung remote call hangs its whole batch.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Upload the file staged at `local_path` and return its public URL and
    /// public id.
    async fn upload(
        &self,
        local_path: &Path,
        options: &UploadOptions,
    ) -> RemoteStoreResult<StoredImage>;

    /// Delete a stored image by public id. A missing id settles as
    /// [`DeleteResult::NotFound`], not as an error.
    async fn delete(&self, public_id: &str) -> RemoteStoreResult<DeleteResult>;

    /// Recognize a provider configuration error (bad or missing credentials)
    /// in a raw error, so the orchestrators can surface misconfiguration
    /// distinctly from ordinary per-file failures. Backends whose provider
    /// has no known signatures keep the default.
    fn classify_error(&self, _err: &RemoteStoreError) -> Option<ConfigErrorKind> {
        None
    }
}
