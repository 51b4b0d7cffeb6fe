//! # Line Splitting
//!
//! Greedy packing of units into lines under a per-line cell budget.

use crate::unit::Units;
use tenji_cells::BrailleCell;
use tracing::debug;

/// One row of cells on a plate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    cells: Vec<BrailleCell>,
}

impl Line {
    pub fn new(cells: Vec<BrailleCell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[BrailleCell] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Unicode braille rendering of the whole line.
    pub fn to_unicode(&self) -> String {
        self.cells.iter().map(BrailleCell::to_unicode).collect()
    }
}

impl From<Vec<BrailleCell>> for Line {
    fn from(cells: Vec<BrailleCell>) -> Self {
        Self::new(cells)
    }
}

/// Splits a flat cell sequence into lines of at most `max_chars` cells.
///
/// Units are never split, so an indicator always stays on the same line as
/// the cell it governs. A unit longer than `max_chars` (a bound pair when
/// `max_chars == 1`) is placed alone on its own over-length line rather than
/// being truncated or dropped.
///
/// # Example
///
/// ```rust
/// use tenji_cells::map;
/// use tenji_layout::split_lines;
///
/// let lines = split_lines(&map("あいうえおかき"), 5);
/// let lens: Vec<usize> = lines.iter().map(|l| l.len()).collect();
/// assert_eq!(lens, vec![5, 2]);
/// ```
pub fn split_lines(cells: &[BrailleCell], max_chars: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<BrailleCell> = Vec::new();

    for unit in Units::new(cells) {
        if current.len() + unit.len() > max_chars && !current.is_empty() {
            lines.push(Line::new(std::mem::take(&mut current)));
        }
        if unit.len() > max_chars {
            debug!(
                unit_len = unit.len(),
                max_chars, "unit exceeds line budget, placing it on its own line"
            );
        }
        current.extend_from_slice(unit);
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    lines
}
