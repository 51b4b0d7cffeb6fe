//! # Cell Mapper
//!
//! Converts a hiragana reading, optionally mixed with digits and Latin
//! letters, into an ordered sequence of braille cells.
//!
//! ## Algorithm
//!
//! The reading is scanned left to right. At each position the first match
//! wins:
//!
//! 1. a two-character contracted sound (きゃ → yōon indicator + か)
//! 2. a voiced / semi-voiced kana (が → dakuten + か)
//! 3. a digit, preceded by the numeric indicator when entering number mode
//! 4. a Latin letter, preceded by the foreign indicator when entering
//!    foreign mode
//! 5. a plain kana or punctuation mark, which returns to kana mode
//!
//! Anything else is dropped without emitting a cell.

use crate::cell::BrailleCell;
use crate::dots::{FOREIGN_INDICATOR, NUMERIC_INDICATOR};
use crate::kana::fold_width;
use crate::rules::{compound_rule, digit_dots, kana_dots, letter_dots, simple_rule, MoraRule};

/// Script mode carried between scan steps.
///
/// The same dot pattern means different things depending on which indicator
/// last opened the current mode (`⠁` is あ, `1` or `a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Kana,
    Number,
    Foreign,
}

/// Maps a reading to braille cells.
///
/// Empty input yields no cells; whitespace-only input yields one blank cell
/// per whitespace character.
///
/// # Example
///
/// ```rust
/// use tenji_cells::{map, DotVector};
///
/// let cells = map("が");
/// assert_eq!(cells.len(), 2);
/// assert_eq!(cells[0].glyph(), "゛");
/// assert_eq!(cells[1].dots(), DotVector::with_dots(&[1, 6]));
/// ```
pub fn map(reading: &str) -> Vec<BrailleCell> {
    if reading.is_empty() {
        return Vec::new();
    }
    if reading.chars().all(char::is_whitespace) {
        return reading.chars().map(|_| BrailleCell::space()).collect();
    }

    let chars: Vec<char> = reading.chars().collect();
    let mut cells = Vec::with_capacity(chars.len() * 2);
    let mut mode = Mode::Kana;
    let mut position = 0;

    while position < chars.len() {
        let (next_mode, consumed) = scan_step(&chars[position..], mode, &mut cells);
        mode = next_mode;
        position += consumed;
    }

    cells
}

/// Performs one scan step at the start of `input`.
///
/// Appends the emitted cells to `out` and returns the mode after the step
/// together with the number of characters consumed (always at least 1 for
/// non-empty input).
pub fn scan_step(input: &[char], mode: Mode, out: &mut Vec<BrailleCell>) -> (Mode, usize) {
    let Some(&c) = input.first() else {
        return (mode, 0);
    };

    if let Some(&next) = input.get(1) {
        if let Some(rule) = compound_rule(c, next) {
            push_rule(rule, out);
            return (mode, 2);
        }
    }

    if let Some(rule) = simple_rule(c) {
        push_rule(rule, out);
        return (mode, 1);
    }

    let folded = fold_width(c);

    if let Some(dots) = digit_dots(folded) {
        if mode != Mode::Number {
            out.push(BrailleCell::new(NUMERIC_INDICATOR, "#"));
        }
        out.push(BrailleCell::new(dots, c.to_string()));
        return (Mode::Number, 1);
    }

    if let Some(dots) = letter_dots(folded.to_ascii_lowercase()) {
        if mode != Mode::Foreign {
            out.push(BrailleCell::new(FOREIGN_INDICATOR, "外"));
        }
        out.push(BrailleCell::new(dots, c.to_string()));
        return (Mode::Foreign, 1);
    }

    if let Some(dots) = kana_dots(c) {
        out.push(BrailleCell::new(dots, c.to_string()));
        return (Mode::Kana, 1);
    }

    (mode, 1)
}

fn push_rule(rule: MoraRule, out: &mut Vec<BrailleCell>) {
    out.push(BrailleCell::new(rule.class.indicator(), rule.class.glyph()));
    // Every rule base is a plain kana.
    if let Some(dots) = kana_dots(rule.base) {
        out.push(BrailleCell::new(dots, rule.base.to_string()));
    }
}

/// Cells of a plate's page number: the numeric indicator then its digits.
///
/// ```rust
/// use tenji_cells::page_number_cells;
///
/// let cells = page_number_cells(12);
/// let glyphs: Vec<&str> = cells.iter().map(|c| c.glyph()).collect();
/// assert_eq!(glyphs, vec!["#", "1", "2"]);
/// ```
pub fn page_number_cells(page_number: usize) -> Vec<BrailleCell> {
    map(&page_number.to_string())
}
