//! # Units
//!
//! The smallest run of cells that line wrapping may not split: a single
//! ordinary cell, or an indicator cell together with the cell after it.
//!
//! The Japanese comma 、 shares its pattern with the voiced mark, so it also
//! binds forward. When the cell it binds to is itself an indicator the unit
//! keeps growing until it ends on a non-indicator cell, so no unit ever ends
//! with an indicator while a following cell exists.

use tenji_cells::BrailleCell;

/// Iterator over the units of a flat cell sequence.
///
/// # Example
///
/// ```rust
/// use tenji_cells::map;
/// use tenji_layout::Units;
///
/// let cells = map("がい");
/// let lens: Vec<usize> = Units::new(&cells).map(<[_]>::len).collect();
/// assert_eq!(lens, vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Units<'a> {
    rest: &'a [BrailleCell],
}

impl<'a> Units<'a> {
    pub fn new(cells: &'a [BrailleCell]) -> Self {
        Self { rest: cells }
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a [BrailleCell];

    fn next(&mut self) -> Option<Self::Item> {
        self.rest.first()?;
        let mut len = 1;
        // A trailing indicator has nothing to bind to and stands alone.
        while len < self.rest.len() && self.rest[len - 1].is_indicator() {
            len += 1;
        }
        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenji_cells::map;

    #[test]
    fn test_indicator_binds_to_next_cell() {
        let cells = map("1");
        let units: Vec<_> = Units::new(&cells).collect();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].len(), 2);
    }

    #[test]
    fn test_only_one_cell_is_bound() {
        // # 1 2 3: only the indicator and the first digit are bound
        let cells = map("123");
        let lens: Vec<usize> = Units::new(&cells).map(<[_]>::len).collect();
        assert_eq!(lens, vec![2, 1, 1]);
    }

    #[test]
    fn test_indicator_run_binds_until_governed_cell() {
        // 、 (same pattern as the voiced mark) + yōon indicator + た
        let cells = map("、ちゃ");
        let lens: Vec<usize> = Units::new(&cells).map(<[_]>::len).collect();
        assert_eq!(lens, vec![3]);
    }

    #[test]
    fn test_trailing_indicator_stands_alone() {
        let cells = vec![BrailleCell::new(tenji_cells::dots::NUMERIC_INDICATOR, "#")];
        let units: Vec<_> = Units::new(&cells).collect();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].len(), 1);
    }

    #[test]
    fn test_units_cover_every_cell_in_order() {
        let cells = map("きゃ1aぽ、あ");
        let rejoined: Vec<BrailleCell> = Units::new(&cells).flatten().cloned().collect();
        assert_eq!(rejoined, cells);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Units::new(&[]).count(), 0);
    }
}
