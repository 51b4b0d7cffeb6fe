//! # Braille Cell
//!
//! A dot pattern paired with the text shown beneath it in guides and previews.

use crate::dots::{DotVector, SPACE};
use serde::{Deserialize, Serialize};

/// One braille character: its raised dots plus a display glyph.
///
/// Indicator cells are ordinary cells whose dot pattern is reserved; their
/// glyph names the indicator (`#` for numbers, `外` for foreign letters,
/// `゛` for a voiced mark and so on).
///
/// # Example
///
/// ```rust
/// use tenji_cells::{BrailleCell, DotVector};
///
/// let cell = BrailleCell::new(DotVector::with_dots(&[1]), "あ");
/// assert_eq!(cell.glyph(), "あ");
/// assert!(!cell.is_indicator());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrailleCell {
    dots: DotVector,
    glyph: String,
}

impl BrailleCell {
    /// Creates a cell.
    pub fn new(dots: DotVector, glyph: impl Into<String>) -> Self {
        Self {
            dots,
            glyph: glyph.into(),
        }
    }

    /// Blank cell used between words and for whitespace-only input.
    pub fn space() -> Self {
        Self::new(SPACE, " ")
    }

    /// Raised-dot pattern.
    #[inline]
    pub fn dots(&self) -> DotVector {
        self.dots
    }

    /// Display glyph.
    #[inline]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Returns whether this cell is an indicator that governs the next cell.
    #[inline]
    pub fn is_indicator(&self) -> bool {
        self.dots.is_indicator()
    }

    /// Unicode braille rendering of the dot pattern.
    #[inline]
    pub fn to_unicode(&self) -> char {
        self.dots.to_unicode()
    }
}
