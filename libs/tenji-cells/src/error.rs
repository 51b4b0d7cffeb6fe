//! # Segmentation Errors
//!
//! Errors raised by a text segmenter. None of them is fatal to a conversion:
//! the caller falls back to per-character mapping.

use thiserror::Error;

/// Errors that can occur while segmenting text into tokens.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The segmenter backend is missing or failed to initialise
    #[error("Segmenter unavailable: {0}")]
    Unavailable(String),

    /// The segmenter failed on this input
    #[error("Segmentation failed: {0}")]
    Failed(String),

    /// Token surfaces do not reproduce the input text
    #[error("Token surfaces do not cover the input: expected {expected} chars, got {actual}")]
    SurfaceMismatch { expected: usize, actual: usize },

    /// A lexicon file could not be parsed
    #[error("Invalid lexicon: {0}")]
    Lexicon(#[from] serde_json::Error),
}
