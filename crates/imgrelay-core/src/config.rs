//! Configuration module
//!
//! Plain configuration records consumed by the orchestrators. `UploadConfig`
//! is supplied per call by the application; `RemoteConfig` carries the remote
//! store credentials and can be loaded from the environment.

use std::env;

use serde::{Deserialize, Serialize};

/// Per-call configuration for a batch image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Form field the images must arrive under
    pub field_name: String,
    /// Destination folder on the remote store
    pub folder: String,
    /// Extension allow-list, case-sensitive. `None` disables the check.
    pub allowed_extensions: Option<Vec<String>>,
    /// Maximum per-file size in KB. `None` disables the check.
    pub max_file_size_kb: Option<u64>,
    /// Maximum number of files per batch. `None` disables the check.
    pub max_uploads: Option<usize>,
    /// Name the remote object after the source file (and allow overwriting
    /// an existing object of that name) instead of letting the store
    /// generate a unique name.
    pub use_source_file_name: bool,
    /// Cleanup mode: delete every attached temp file (true, the default) or
    /// only the files under `field_name` plus stray non-image files.
    pub delete_all_temp_files: bool,
}

impl UploadConfig {
    pub fn new(field_name: impl Into<String>, folder: impl Into<String>) -> Self {
        UploadConfig {
            field_name: field_name.into(),
            folder: folder.into(),
            allowed_extensions: None,
            max_file_size_kb: None,
            max_uploads: None,
            use_source_file_name: false,
            delete_all_temp_files: true,
        }
    }
}

/// Credentials for the remote media store.
///
/// All three values are required for remote calls to succeed; a backend
/// reports the first missing one with the provider's canonical
/// "Must supply …" message so misconfiguration stays recognizable.
#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

impl RemoteConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        RemoteConfig {
            cloud_name: Some(cloud_name.into()),
            api_key: Some(api_key.into()),
            api_secret: Some(api_secret.into()),
        }
    }

    /// Load credentials from `IMGRELAY_CLOUD_NAME`, `IMGRELAY_API_KEY` and
    /// `IMGRELAY_API_SECRET`, reading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        RemoteConfig {
            cloud_name: env::var("IMGRELAY_CLOUD_NAME").ok(),
            api_key: env::var("IMGRELAY_API_KEY").ok(),
            api_secret: env::var("IMGRELAY_API_SECRET").ok(),
        }
    }

    /// The provider's canonical message for the first missing credential,
    /// or `None` when the configuration is complete.
    pub fn missing_setting(&self) -> Option<&'static str> {
        if self.cloud_name.is_none() {
            Some("Must supply cloud_name")
        } else if self.api_key.is_none() {
            Some("Must supply api_key")
        } else if self.api_secret.is_none() {
            Some("Must supply api_secret")
        } else {
            None
        }
    }
}
