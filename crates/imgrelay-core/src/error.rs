//! Error types module
//!
//! Batch validation failures carry both a client-facing message and the HTTP
//! status code the (excluded) HTTP layer should answer with. They are returned
//! as values and folded into reports, never thrown through the caller.

use thiserror::Error;

/// A violation found while validating an upload batch.
///
/// Validation is fail-fast: the first violation in rule order is returned and
/// no remote call is made for the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You have not uploaded any file")]
    NoFilesUploaded,

    #[error("No file has correct field name. The field name has to be {field_name}")]
    MissingField { field_name: String },

    #[error("You can't upload more than {limit} {}.", if *.limit == 1 { "image" } else { "images" })]
    TooManyFiles { limit: usize },

    #[error("You are trying to upload a file which is not a image")]
    NotAnImage,

    #[error("File must have one of the following extensions: {}", .allowed.join(", "))]
    DisallowedExtension { allowed: Vec<String> },

    #[error("File size must be lower than {limit_kb}kb")]
    FileTooLarge { limit_kb: u64 },
}

impl ValidationError {
    /// HTTP status code for this violation.
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::NoFilesUploaded => 404,
            ValidationError::MissingField { .. } => 404,
            ValidationError::TooManyFiles { .. } => 400,
            ValidationError::NotAnImage => 415,
            ValidationError::DisallowedExtension { .. } => 415,
            ValidationError::FileTooLarge { .. } => 406,
        }
    }
}
