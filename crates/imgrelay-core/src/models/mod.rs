//! Domain models

pub mod file;
pub mod report;

pub use file::{FileHandle, RequestFiles};
pub use report::{CleanupReport, DeleteReport, ErrorInfo, UploadReport, UploadedImage};
