//! # Dot Vectors
//!
//! The six raised-dot positions of one braille cell.
//!
//! Dots are numbered the standard way: dots 1-3 run down the left column,
//! dots 4-6 down the right column. Bit `i` of the packed form is dot `i + 1`,
//! which is also the layout of the Unicode braille block.

use serde::{Deserialize, Serialize};

/// First code point of the Unicode braille patterns block.
pub const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// Raised-dot pattern of one cell, dot-1 first.
///
/// # Example
///
/// ```rust
/// use tenji_cells::DotVector;
///
/// let ka = DotVector::with_dots(&[1, 6]);
/// assert_eq!(ka.as_array(), [true, false, false, false, false, true]);
/// assert_eq!(ka.bits(), 0b10_0001);
/// assert_eq!(ka.to_unicode(), '⠡');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DotVector([bool; 6]);

impl DotVector {
    /// Cell with no raised dots.
    pub const EMPTY: DotVector = DotVector([false; 6]);

    /// Creates a dot vector from six flags, dot-1 first.
    pub const fn new(dots: [bool; 6]) -> Self {
        Self(dots)
    }

    /// Creates a dot vector from a bitmask where bit `i` is dot `i + 1`.
    ///
    /// Bits above the sixth are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self([
            bits & 0x01 != 0,
            bits & 0x02 != 0,
            bits & 0x04 != 0,
            bits & 0x08 != 0,
            bits & 0x10 != 0,
            bits & 0x20 != 0,
        ])
    }

    /// Creates a dot vector from 1-based dot numbers.
    ///
    /// Numbers outside `1..=6` are ignored.
    pub const fn with_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dots.len() {
            let dot = dots[i];
            if dot >= 1 && dot <= 6 {
                bits |= 1 << (dot - 1);
            }
            i += 1;
        }
        Self::from_bits(bits)
    }

    /// Packs the dots into a bitmask where bit `i` is dot `i + 1`.
    pub const fn bits(&self) -> u8 {
        let mut bits = 0u8;
        let mut i = 0;
        while i < 6 {
            if self.0[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        bits
    }

    /// Returns the six flags, dot-1 first.
    #[inline]
    pub const fn as_array(&self) -> [bool; 6] {
        self.0
    }

    /// Returns whether the 1-based dot is raised. Out-of-range dots are never raised.
    #[inline]
    pub fn is_raised(&self, dot: usize) -> bool {
        dot >= 1 && dot <= 6 && self.0[dot - 1]
    }

    /// Iterates over the raised dots as 0-based indices.
    pub fn raised(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &on)| on.then_some(index))
    }

    /// Number of raised dots.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }

    /// Returns true if no dot is raised.
    pub fn is_empty(&self) -> bool {
        self.bits() == 0
    }

    /// Returns whether this pattern is one of the reserved indicator patterns.
    ///
    /// Indicators are not characters themselves; they change the meaning of
    /// the cell that follows and must stay on the same line as it.
    pub fn is_indicator(&self) -> bool {
        INDICATOR_PATTERNS.contains(self)
    }

    /// Unicode braille character for this pattern.
    pub fn to_unicode(&self) -> char {
        // U+2800..=U+283F are all assigned scalar values.
        char::from_u32(UNICODE_BRAILLE_BASE + u32::from(self.bits())).unwrap_or('\u{2800}')
    }

    /// Parses a character from the 6-dot part of the Unicode braille block.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenji_cells::DotVector;
    ///
    /// assert_eq!(DotVector::from_unicode('⠁'), Some(DotVector::with_dots(&[1])));
    /// assert_eq!(DotVector::from_unicode('a'), None);
    /// ```
    pub fn from_unicode(c: char) -> Option<Self> {
        let offset = u32::from(c).checked_sub(UNICODE_BRAILLE_BASE)?;
        (offset < 0x40).then(|| Self::from_bits(offset as u8))
    }
}

impl From<[bool; 6]> for DotVector {
    fn from(dots: [bool; 6]) -> Self {
        Self(dots)
    }
}

// =============================================================================
// INDICATOR PATTERNS
// =============================================================================

/// Voiced mark (dakuten), dot 5.
pub const DAKUTEN: DotVector = DotVector::with_dots(&[5]);

/// Semi-voiced mark (handakuten), dot 6.
pub const HANDAKUTEN: DotVector = DotVector::with_dots(&[6]);

/// Contracted sound mark (yōon), dot 4.
pub const YOON: DotVector = DotVector::with_dots(&[4]);

/// Voiced contracted sound mark, dots 4-5.
pub const YOON_DAKUTEN: DotVector = DotVector::with_dots(&[4, 5]);

/// Semi-voiced contracted sound mark, dots 4-6.
pub const YOON_HANDAKUTEN: DotVector = DotVector::with_dots(&[4, 6]);

/// Numeric indicator (sūfu), dots 3-4-5-6.
pub const NUMERIC_INDICATOR: DotVector = DotVector::with_dots(&[3, 4, 5, 6]);

/// Foreign-letter indicator (gaijifu), dots 5-6.
pub const FOREIGN_INDICATOR: DotVector = DotVector::with_dots(&[5, 6]);

/// Blank cell.
pub const SPACE: DotVector = DotVector::EMPTY;

/// Every reserved indicator pattern.
pub const INDICATOR_PATTERNS: [DotVector; 7] = [
    DAKUTEN,
    HANDAKUTEN,
    YOON,
    YOON_DAKUTEN,
    YOON_HANDAKUTEN,
    NUMERIC_INDICATOR,
    FOREIGN_INDICATOR,
];
