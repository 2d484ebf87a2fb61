//! Provider configuration-error classification
//!
//! Cloudinary reports misconfiguration either as a bare string (a credential
//! is missing entirely) or as an error object whose message starts with a
//! known prefix (a credential is present but wrong). The string matching is
//! deliberately confined to this module; adapters surface it through
//! [`RemoteStore::classify_error`](crate::RemoteStore::classify_error).

/// A recognized provider configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    MissingCloudName,
    MissingApiKey,
    MissingApiSecret,
    InvalidCloudName,
    InvalidApiKey,
    InvalidSignature,
}

impl ConfigErrorKind {
    /// Human-readable replacement for the provider's raw error text.
    pub fn message(&self) -> &'static str {
        match self {
            ConfigErrorKind::MissingCloudName => {
                "Cloudinary configuration error: You must provide cloud name."
            }
            ConfigErrorKind::MissingApiKey => {
                "Cloudinary configuration error: You must provide API key."
            }
            ConfigErrorKind::MissingApiSecret => {
                "Cloudinary configuration error: You must provide API secret."
            }
            ConfigErrorKind::InvalidCloudName => {
                "Cloudinary configuration error: Invalid cloud name provided."
            }
            ConfigErrorKind::InvalidApiKey => {
                "Cloudinary configuration error: Invalid API key provided."
            }
            ConfigErrorKind::InvalidSignature => {
                "Cloudinary configuration error: Invalid API secret."
            }
        }
    }
}

/// Classify Cloudinary's raw error text.
///
/// Pure function: unrecognized text maps to `None` and repeated calls with
/// the same input always agree.
pub fn classify_cloudinary_error(raw: &str) -> Option<ConfigErrorKind> {
    // Missing credentials arrive as exact bare strings
    match raw {
        "Must supply cloud_name" => return Some(ConfigErrorKind::MissingCloudName),
        "Must supply api_key" => return Some(ConfigErrorKind::MissingApiKey),
        "Must supply api_secret" => return Some(ConfigErrorKind::MissingApiSecret),
        _ => {}
    }

    // Invalid credentials arrive as error messages with a known prefix
    if raw.starts_with("Invalid cloud_name") {
        Some(ConfigErrorKind::InvalidCloudName)
    } else if raw.starts_with("Invalid api_key") {
        Some(ConfigErrorKind::InvalidApiKey)
    } else if raw.starts_with("Invalid Signature") {
        Some(ConfigErrorKind::InvalidSignature)
    } else {
        None
    }
}
