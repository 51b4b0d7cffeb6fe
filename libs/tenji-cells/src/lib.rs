//! # Tenji Cells
//!
//! Transliteration of Japanese readings into 6-dot braille cells.
//!
//! ## Architecture
//!
//! ```text
//! raw text → Segmenter (optional) → MappedWord (reading) → map() → BrailleCell
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tenji_cells::{convert, flatten_words, map};
//!
//! // Map a reading directly
//! let cells = map("きゃ");
//! assert_eq!(cells.len(), 2);
//!
//! // Or run a conversion session over raw text
//! let words = convert("1a", None);
//! let flat = flatten_words(&words);
//! assert_eq!(flat.len(), 5); // #, 1, blank, 外, a
//! ```

pub mod cell;
pub mod dots;
pub mod error;
pub mod kana;
pub mod mapper;
pub mod rules;
pub mod segment;
pub mod words;

pub use cell::BrailleCell;
pub use dots::DotVector;
pub use error::SegmentError;
pub use kana::katakana_to_hiragana;
pub use mapper::{map, page_number_cells, Mode};
pub use rules::RuleClass;
pub use segment::{LexiconSegmenter, Segmenter, Token};
pub use words::{convert, convert_per_character, flatten_words, MappedWord};
