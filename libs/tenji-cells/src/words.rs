//! # Mapped Words
//!
//! A conversion session turns raw text into words, each carrying its reading,
//! its cells and the span of the input it came from.

use crate::cell::BrailleCell;
use crate::error::SegmentError;
use crate::kana::katakana_to_hiragana;
use crate::mapper::map;
use crate::segment::{Segmenter, Token};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, warn};

/// One converted word.
///
/// `source_span` counts characters (not bytes) of the original input.
/// The cells can only change through [`MappedWord::correct_reading`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedWord {
    original_text: String,
    reading_text: String,
    cells: Vec<BrailleCell>,
    source_span: Range<usize>,
}

impl MappedWord {
    /// Maps `reading` and records where `original` sits in the input.
    pub fn new(
        original: impl Into<String>,
        reading: impl Into<String>,
        source_span: Range<usize>,
    ) -> Self {
        let reading_text = reading.into();
        let cells = map(&reading_text);
        Self {
            original_text: original.into(),
            reading_text,
            cells,
            source_span,
        }
    }

    #[inline]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[inline]
    pub fn reading_text(&self) -> &str {
        &self.reading_text
    }

    #[inline]
    pub fn cells(&self) -> &[BrailleCell] {
        &self.cells
    }

    #[inline]
    pub fn source_span(&self) -> Range<usize> {
        self.source_span.clone()
    }

    /// Replaces the reading and re-derives the cells from it.
    ///
    /// An empty reading leaves the word without cells, which removes it from
    /// the flattened output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenji_cells::MappedWord;
    ///
    /// let mut word = MappedWord::new("日", "にち", 0..1);
    /// word.correct_reading("ひ");
    /// assert_eq!(word.reading_text(), "ひ");
    /// assert_eq!(word.cells().len(), 1);
    /// ```
    pub fn correct_reading(&mut self, reading: impl Into<String>) {
        self.reading_text = reading.into();
        self.cells = map(&self.reading_text);
    }
}

/// Converts raw text into mapped words.
///
/// With a segmenter, each token's reading (katakana normalized to hiragana,
/// the surface when no reading is known) is mapped separately. Without one,
/// or when it fails, every character becomes its own word.
///
/// # Example
///
/// ```rust
/// use tenji_cells::convert;
///
/// let words = convert("あい", None);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].source_span(), 1..2);
/// ```
pub fn convert(text: &str, segmenter: Option<&dyn Segmenter>) -> Vec<MappedWord> {
    if text.is_empty() {
        return Vec::new();
    }

    let Some(segmenter) = segmenter else {
        debug!("no segmenter configured, converting per character");
        return convert_per_character(text);
    };

    match segment_checked(segmenter, text) {
        Ok(tokens) => words_from_tokens(tokens),
        Err(err) => {
            warn!(error = %err, "segmenter failed, converting per character");
            convert_per_character(text)
        }
    }
}

/// Converts every character of `text` into its own word, reading = surface.
pub fn convert_per_character(text: &str) -> Vec<MappedWord> {
    text.chars()
        .enumerate()
        .map(|(index, c)| {
            let surface = c.to_string();
            MappedWord::new(surface.clone(), surface, index..index + 1)
        })
        .collect()
}

fn segment_checked(segmenter: &dyn Segmenter, text: &str) -> Result<Vec<Token>, SegmentError> {
    let tokens = segmenter.segment(text)?;
    let joined: String = tokens.iter().map(|token| token.surface.as_str()).collect();
    if joined != text {
        return Err(SegmentError::SurfaceMismatch {
            expected: text.chars().count(),
            actual: joined.chars().count(),
        });
    }
    Ok(tokens)
}

fn words_from_tokens(tokens: Vec<Token>) -> Vec<MappedWord> {
    let mut start = 0;
    tokens
        .into_iter()
        .map(|token| {
            let len = token.surface.chars().count();
            let reading = katakana_to_hiragana(token.reading.as_deref().unwrap_or(&token.surface));
            let word = MappedWord::new(token.surface, reading, start..start + len);
            start += len;
            word
        })
        .collect()
}

/// Concatenates the cells of all words, one blank cell between words.
///
/// Words without cells are skipped entirely so they never produce doubled
/// or trailing blanks.
///
/// # Example
///
/// ```rust
/// use tenji_cells::{flatten_words, MappedWord};
///
/// let words = vec![
///     MappedWord::new("あ", "あ", 0..1),
///     MappedWord::new("漢", "", 1..2),
///     MappedWord::new("い", "い", 2..3),
/// ];
/// let glyphs: Vec<String> = flatten_words(&words).iter().map(|c| c.glyph().to_string()).collect();
/// assert_eq!(glyphs, vec!["あ", " ", "い"]);
/// ```
pub fn flatten_words(words: &[MappedWord]) -> Vec<BrailleCell> {
    let mut cells = Vec::new();
    for word in words.iter().filter(|word| !word.cells.is_empty()) {
        if !cells.is_empty() {
            cells.push(BrailleCell::space());
        }
        cells.extend_from_slice(&word.cells);
    }
    cells
}
