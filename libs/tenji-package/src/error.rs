//! # Package Errors
//!
//! Error types for archive assembly and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Layout settings were rejected before any work started
    #[error("Invalid settings: {0}")]
    Config(#[from] config::ConfigError),

    /// A plate mesh could not be built or serialized
    #[error("Mesh error on plate {plate}: {source}")]
    Mesh {
        plate: usize,
        #[source]
        source: tenji_mesh::MeshError,
    },

    /// The zip writer failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Filesystem failure at `path`
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackageError {
    /// Creates an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
