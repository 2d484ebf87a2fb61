//! Imgrelay Core Library
//!
//! This crate provides the domain models, configuration, validation, and error
//! types shared by the imgrelay orchestration crates: staged upload files, the
//! batch validation rules applied before any remote call, and the report
//! values every orchestration returns.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{RemoteConfig, UploadConfig};
pub use error::ValidationError;
pub use models::{
    CleanupReport, DeleteReport, ErrorInfo, FileHandle, RequestFiles, UploadReport, UploadedImage,
};
pub use validation::validate_upload_request;
