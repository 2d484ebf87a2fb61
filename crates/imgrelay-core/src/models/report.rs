//! Orchestration reports
//!
//! Every orchestration call returns a plain report value rather than
//! propagating an error: the caller always gets a single coherent summary of
//! what succeeded, what failed, and with which status code. The structs derive
//! serde so an HTTP layer can serialize them directly.

use serde::{Deserialize, Serialize};

/// Status code and message attached to a failed report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub status_code: Option<u16>,
    pub message: Option<String>,
}

impl ErrorInfo {
    /// Append `text` to the message, preserving anything already there.
    /// Cleanup failures use this so they never mask a prior error.
    pub fn append_message(&mut self, text: &str) {
        match &mut self.message {
            Some(message) => message.push_str(text),
            None => self.message = Some(text.trim_start().to_string()),
        }
    }

    /// Set the status code only when none is present; an earlier
    /// validation/upload status takes priority over later failures.
    pub fn status_code_if_unset(&mut self, status_code: u16) {
        self.status_code.get_or_insert(status_code);
    }
}

/// One successfully uploaded image, as recorded in an [`UploadReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public URL of the stored image
    pub image_src: String,
    /// Remote store identifier, used for later deletion
    pub image_public_id: String,
}

/// Aggregate result of one batch upload orchestration.
///
/// `images_info` keeps every successful upload even when the overall report
/// is an error: partial successes are never rolled back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadReport {
    pub is_error: bool,
    pub error_info: ErrorInfo,
    pub images_info: Vec<UploadedImage>,
}

impl UploadReport {
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        UploadReport {
            is_error: true,
            error_info: ErrorInfo {
                status_code: Some(status_code),
                message: Some(message.into()),
            },
            images_info: Vec::new(),
        }
    }
}

/// Aggregate result of one batch delete orchestration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteReport {
    pub is_error: bool,
    pub error_info: ErrorInfo,
}

/// Aggregate result of a standalone temp-file cleanup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupReport {
    pub is_error: bool,
    pub error_info: ErrorInfo,
}
