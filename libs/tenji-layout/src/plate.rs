//! # Plates
//!
//! Grouping of lines into numbered plates.

use crate::line::{split_lines, Line};
use config::{ConfigError, LayoutSettings};
use tenji_cells::{page_number_cells, BrailleCell};

/// One physical plate: up to `max_lines_per_plate` lines and a 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plate {
    number: usize,
    lines: Vec<Line>,
}

impl Plate {
    pub fn new(number: usize, lines: Vec<Line>) -> Self {
        Self { number, lines }
    }

    /// 1-based page number.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Cells of the page number embossed in the plate's left column.
    pub fn page_number_cells(&self) -> Vec<BrailleCell> {
        page_number_cells(self.number)
    }

    /// Length of the longest line.
    pub fn widest_line(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0)
    }
}

/// Groups lines into plates of at most `max_lines` lines, numbered from 1.
///
/// The last plate may hold fewer lines. A `max_lines` of zero is treated as
/// one; validated settings never pass zero.
///
/// # Example
///
/// ```rust
/// use tenji_cells::map;
/// use tenji_layout::{group_plates, split_lines};
///
/// let lines = split_lines(&map("あいうえお"), 1);
/// let plates = group_plates(lines, 2);
/// assert_eq!(plates.len(), 3);
/// assert_eq!(plates[2].number(), 3);
/// assert_eq!(plates[2].lines().len(), 1);
/// ```
pub fn group_plates(lines: Vec<Line>, max_lines: usize) -> Vec<Plate> {
    let window = max_lines.max(1);
    let mut plates = Vec::with_capacity(lines.len().div_ceil(window));
    let mut lines = lines.into_iter().peekable();

    while lines.peek().is_some() {
        let chunk: Vec<Line> = lines.by_ref().take(window).collect();
        plates.push(Plate::new(plates.len() + 1, chunk));
    }

    plates
}

/// Splits cells into lines and groups them into plates under `settings`.
///
/// Settings are validated before any work is done.
pub fn paginate(
    cells: &[BrailleCell],
    settings: &LayoutSettings,
) -> Result<Vec<Plate>, ConfigError> {
    settings.validate()?;
    let lines = split_lines(cells, settings.max_chars_per_line);
    Ok(group_plates(lines, settings.max_lines_per_plate))
}
