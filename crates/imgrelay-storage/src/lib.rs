//! Imgrelay Storage Library
//!
//! This crate defines the abstract remote media store the orchestrators talk
//! to: the [`RemoteStore`] trait, its error and option types, the provider
//! configuration-error classifier, and an in-memory backend used in tests and
//! local development.
//!
//! Provider SDK adapters live outside this workspace; anything implementing
//! [`RemoteStore`] plugs into the orchestrators unchanged.

pub mod classifier;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use classifier::{classify_cloudinary_error, ConfigErrorKind};
pub use memory::MemoryRemoteStore;
pub use traits::{
    DeleteResult, RemoteStore, RemoteStoreError, RemoteStoreResult, StoredImage, UploadOptions,
};
