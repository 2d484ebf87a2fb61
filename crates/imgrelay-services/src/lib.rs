//! Imgrelay Services Layer
//!
//! This crate hosts the batch orchestrators: validate a request's staged
//! image files, fan uploads out to the remote store, delete stored images by
//! public id, and always clean the local temp files up afterward. Every
//! orchestration settles all of its attempts, folds the outcomes into a
//! single report value, and never lets one item's failure cancel a sibling.

pub mod cleanup;
pub mod delete;
pub mod upload;

pub use cleanup::cleanup_temp_files;
pub use delete::{delete_image, delete_images};
pub use upload::upload_images;

// Re-export the vocabulary callers need alongside the orchestrators
pub use imgrelay_core::{
    CleanupReport, DeleteReport, ErrorInfo, FileHandle, RequestFiles, UploadConfig, UploadReport,
    UploadedImage,
};
pub use imgrelay_storage::{RemoteStore, RemoteStoreError, StoredImage, UploadOptions};
