//! # Braille Transcript
//!
//! Renders plates in the six-dot braille computer code used by `.bse`
//! files: every cell becomes one printable ASCII character.

use tenji_cells::{BrailleCell, DotVector};
use tenji_layout::Plate;

/// Character written for a dot pattern with no table entry.
pub const UNKNOWN_CHAR: char = '?';

/// ASCII character for each 6-bit dot pattern (bit i = dot i + 1).
#[rustfmt::skip]
const ASCII_TABLE: [char; 64] = {
    let mut table = [UNKNOWN_CHAR; 64];
    let pairs: &[(u8, char)] = &[
        (0x00, ' '), (0x01, 'a'), (0x03, 'b'), (0x09, 'c'), (0x19, 'd'), (0x11, 'e'),
        (0x0B, 'f'), (0x1B, 'g'), (0x13, 'h'), (0x0A, 'i'), (0x1A, 'j'), (0x05, 'k'),
        (0x07, 'l'), (0x0D, 'm'), (0x1D, 'n'), (0x15, 'o'), (0x0F, 'p'), (0x1F, 'q'),
        (0x17, 'r'), (0x0E, 's'), (0x1E, 't'), (0x25, 'u'), (0x27, 'v'), (0x3A, 'w'),
        (0x2D, 'x'), (0x3D, 'y'), (0x35, 'z'), (0x3C, '#'), (0x30, ';'), (0x10, '"'),
        (0x20, ','), (0x08, '@'), (0x18, '^'), (0x28, '_'), (0x02, '1'), (0x06, '2'),
        (0x12, '3'), (0x32, '4'), (0x22, '5'), (0x16, '6'), (0x36, '7'), (0x26, '8'),
        (0x14, '9'), (0x34, '0'), (0x04, '\''), (0x0C, '/'), (0x1C, '>'), (0x24, '-'),
        (0x2C, '%'), (0x3E, '='), (0x21, '*'), (0x23, '<'), (0x29, '['), (0x2B, '$'),
        (0x2F, '+'), (0x31, ']'), (0x33, ':'), (0x37, '?'), (0x38, '!'), (0x39, '('),
        (0x3B, ')'), (0x3F, '|'),
    ];
    let mut i = 0;
    while i < pairs.len() {
        table[pairs[i].0 as usize] = pairs[i].1;
        i += 1;
    }
    table
};

/// Line separator inside a transcript.
pub const LINE_BREAK: &str = "\r\n";

/// Returns the braille computer code character of a dot pattern.
///
/// # Example
///
/// ```rust
/// use tenji_cells::dots::NUMERIC_INDICATOR;
/// use tenji_cells::DotVector;
/// use tenji_package::transcript::ascii_char;
///
/// assert_eq!(ascii_char(NUMERIC_INDICATOR), '#');
/// assert_eq!(ascii_char(DotVector::with_dots(&[1])), 'a');
/// ```
pub fn ascii_char(dots: DotVector) -> char {
    ASCII_TABLE[usize::from(dots.bits() & 0x3F)]
}

/// Renders one line of cells.
pub fn ascii_line(cells: &[BrailleCell]) -> String {
    cells.iter().map(|cell| ascii_char(cell.dots())).collect()
}

/// Renders plates as a transcript: one text line per braille line joined by
/// CRLF, with an empty line closing each plate.
///
/// # Example
///
/// ```rust
/// use config::LayoutSettings;
/// use tenji_cells::map;
/// use tenji_layout::paginate;
/// use tenji_package::transcript::render_transcript;
///
/// let plates = paginate(&map("1"), &LayoutSettings::default()).unwrap();
/// assert_eq!(render_transcript(&plates), "#a\r\n");
/// ```
pub fn render_transcript(plates: &[Plate]) -> String {
    let mut rows: Vec<String> = Vec::new();
    for plate in plates {
        rows.extend(plate.lines().iter().map(|line| ascii_line(line.cells())));
        rows.push(String::new());
    }
    rows.join(LINE_BREAK)
}
