//! # Archive
//!
//! In-memory zip assembly and the atomic write of the result to disk.
//!
//! Entries carry a fixed timestamp and no platform permissions, so the same
//! entries always produce the same bytes.

use crate::error::PackageError;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// One named file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub data: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// Builds a deflated zip holding `entries` in order.
///
/// # Example
///
/// ```rust
/// use tenji_package::archive::{build_archive, Entry};
///
/// let bytes = build_archive(&[Entry::new("a.txt", "hello")]).unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
pub fn build_archive(entries: &[Entry]) -> Result<Vec<u8>, PackageError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in entries {
        writer.start_file(entry.name.as_str(), entry_options())?;
        writer.write_all(&entry.data).map_err(ZipError::from)?;
    }
    Ok(writer.finish()?.into_inner())
}

/// Writes `bytes` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory which is
/// renamed over `path` only once fully written. On failure nothing is left
/// at `path` and the temporary file is removed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PackageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| PackageError::io(dir, e))?;
    file.write_all(bytes)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| PackageError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| PackageError::io(path, e.error))?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote package");
    Ok(())
}
