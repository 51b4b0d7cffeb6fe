//! # Mesh Errors
//!
//! Error types for plate mesh generation and STL serialization.

use thiserror::Error;

/// Errors that can occur while building or serializing a plate mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many triangles for the STL count field
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// STL data is shorter than its header claims
    #[error("Truncated STL: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// I/O failure while writing STL
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("tube height must be positive");
        assert_eq!(
            err.to_string(),
            "Degenerate geometry: tube height must be positive"
        );
        let err = MeshError::Truncated {
            expected: 134,
            actual: 84,
        };
        assert_eq!(err.to_string(), "Truncated STL: expected 134 bytes, found 84");
    }
}
