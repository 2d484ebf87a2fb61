//! Staged upload files
//!
//! The multipart-parsing layer stages each uploaded file on local disk and
//! hands the library a [`RequestFiles`] registry describing them. The library
//! never parses request bodies itself; it only reads these handles and deletes
//! their temp paths during cleanup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One uploaded file staged as a local temporary file.
///
/// Read-only to the library: validation and upload only inspect the fields,
/// and cleanup deletes the file at `temp_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// Form field the file arrived under
    pub field_name: String,
    /// Filename as supplied by the client
    pub original_name: String,
    /// MIME type as supplied by the client
    pub mime_type: String,
    /// Size of the staged file in bytes
    pub size_bytes: u64,
    /// Where the staging layer wrote the file
    pub temp_path: PathBuf,
}

impl FileHandle {
    pub fn new(
        field_name: impl Into<String>,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        temp_path: impl Into<PathBuf>,
    ) -> Self {
        FileHandle {
            field_name: field_name.into(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            temp_path: temp_path.into(),
        }
    }

    /// Whether the client-declared MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Case-sensitive extension after the last `.` of `original_name`.
    ///
    /// Returns `None` when the name has no parseable extension, so a bare
    /// `README` skips extension checks entirely.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.original_name)
            .extension()
            .and_then(|ext| ext.to_str())
    }
}

/// Ordered registry of the files attached to one request.
///
/// Maps form field name to the files uploaded under it, preserving field
/// insertion order. Frameworks hand over either a single file or a list per
/// field; [`RequestFiles::push`] normalizes both shapes into a flat list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFiles {
    fields: Vec<(String, Vec<FileHandle>)>,
}

impl RequestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a file under its own `field_name`, appending to any files
    /// already registered for that field.
    pub fn push(&mut self, file: FileHandle) {
        match self
            .fields
            .iter_mut()
            .find(|(name, _)| *name == file.field_name)
        {
            Some((_, files)) => files.push(file),
            None => self.fields.push((file.field_name.clone(), vec![file])),
        }
    }

    /// True when no file at all is attached to the request.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|(_, files)| files.is_empty())
    }

    /// Files attached under one field name, in upload order.
    pub fn field(&self, field_name: &str) -> &[FileHandle] {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, files)| files.as_slice())
            .unwrap_or(&[])
    }

    /// Every attached file across every field, in field insertion order.
    pub fn all_files(&self) -> impl Iterator<Item = &FileHandle> {
        self.fields.iter().flat_map(|(_, files)| files.iter())
    }
}

impl FromIterator<FileHandle> for RequestFiles {
    fn from_iter<I: IntoIterator<Item = FileHandle>>(iter: I) -> Self {
        let mut files = RequestFiles::new();
        for file in iter {
            files.push(file);
        }
        files
    }
}
