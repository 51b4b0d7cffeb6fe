//! # Text Segmentation
//!
//! Contract for an external capability that splits raw text into words and
//! supplies their phonetic readings, plus a small lexicon-driven
//! implementation.
//!
//! The conversion session never requires a segmenter. It is injected as
//! `Option<&dyn Segmenter>`, and `None` selects per-character conversion.

use crate::error::SegmentError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One word produced by a segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Exact slice of the input text covered by this token.
    pub surface: String,
    /// Phonetic reading in hiragana or katakana, if known.
    pub reading: Option<String>,
}

impl Token {
    /// Creates a token with a known reading.
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
        }
    }

    /// Creates a token without a reading; the surface is used instead.
    pub fn bare(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
        }
    }
}

/// Splits text into tokens with readings.
///
/// Token surfaces, concatenated in order, must reproduce the input exactly.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError>;
}

/// Segmenter driven by a fixed surface → reading lexicon.
///
/// Uses greedy longest match; characters not covered by any entry become
/// single-character tokens without a reading.
///
/// # Example
///
/// ```rust
/// use tenji_cells::{LexiconSegmenter, Segmenter};
///
/// let segmenter = LexiconSegmenter::from_entries([("点字", "テンジ"), ("点", "テン")]);
/// let tokens = segmenter.segment("点字だ").unwrap();
/// assert_eq!(tokens[0].surface, "点字");
/// assert_eq!(tokens[0].reading.as_deref(), Some("テンジ"));
/// assert_eq!(tokens[1].surface, "だ");
/// assert_eq!(tokens[1].reading, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexiconSegmenter {
    entries: HashMap<String, String>,
    longest: usize,
}

impl LexiconSegmenter {
    /// Builds a segmenter from `(surface, reading)` pairs. Empty surfaces are ignored.
    pub fn from_entries<I, S, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<String>,
    {
        let entries: HashMap<String, String> = entries
            .into_iter()
            .map(|(surface, reading)| (surface.into(), reading.into()))
            .filter(|(surface, _)| !surface.is_empty())
            .collect();
        let longest = entries
            .keys()
            .map(|surface| surface.chars().count())
            .max()
            .unwrap_or(0);
        Self { entries, longest }
    }

    /// Parses a JSON object mapping surfaces to readings.
    ///
    /// ```rust
    /// use tenji_cells::LexiconSegmenter;
    ///
    /// let segmenter = LexiconSegmenter::from_json(r#"{ "日本": "にほん" }"#).unwrap();
    /// assert_eq!(segmenter.len(), 1);
    /// assert!(LexiconSegmenter::from_json("[1, 2]").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SegmentError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Number of lexicon entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Segmenter for LexiconSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        // Byte offset of every char boundary, including the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut tokens = Vec::new();
        let mut start = 0;
        while start < char_count {
            let max_len = self.longest.min(char_count - start);
            let matched = (1..=max_len).rev().find_map(|len| {
                let surface = &text[bounds[start]..bounds[start + len]];
                self.entries
                    .get(surface)
                    .map(|reading| (len, Token::new(surface, reading.as_str())))
            });

            match matched {
                Some((len, token)) => {
                    tokens.push(token);
                    start += len;
                }
                None => {
                    tokens.push(Token::bare(&text[bounds[start]..bounds[start + 1]]));
                    start += 1;
                }
            }
        }

        Ok(tokens)
    }
}
