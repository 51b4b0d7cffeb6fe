//! # Guide Sheet
//!
//! HTML page listing every plate line by line, each cell shown as its
//! Unicode braille character above the glyph it came from. Used to check
//! and order printed plates.

use std::fmt::Write;
use tenji_cells::BrailleCell;
use tenji_layout::Plate;

/// Title shown at the top of the guide.
pub const GUIDE_TITLE: &str = "Tenji Fab Export Guide";

const STYLE: &str = "\
body { font-family: \"Noto Sans JP\", sans-serif; padding: 20px; color: #333; }
h2 { border-bottom: 2px solid #007AFF; margin-top: 30px; }
.page-braille { font-size: 1.5em; color: #555; vertical-align: middle; }
.plate-block { page-break-inside: avoid; margin-bottom: 40px; }
.cell { display: inline-block; text-align: center; margin: 2px; border: 1px solid #eee; padding: 2px; }
.cell .dots { font-size: 20px; }
.cell .glyph { font-size: 12px; }
table { width: 100%; border: 1px solid #ddd; border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 8px; vertical-align: top; }
";

/// Escapes text for use in HTML element content and attribute values.
///
/// # Example
///
/// ```rust
/// use tenji_package::guide::escape_html;
///
/// assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn unicode_run(cells: &[BrailleCell]) -> String {
    cells.iter().map(BrailleCell::to_unicode).collect()
}

/// Renders the guide for `plates`.
///
/// # Example
///
/// ```rust
/// use config::LayoutSettings;
/// use tenji_cells::map;
/// use tenji_layout::paginate;
/// use tenji_package::guide::render_guide;
///
/// let plates = paginate(&map("1"), &LayoutSettings::default()).unwrap();
/// let html = render_guide(&plates);
/// assert!(html.contains("Plate 01"));
/// assert!(html.contains("⠼⠁"));
/// ```
pub fn render_guide(plates: &[Plate]) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_guide(&mut html, plates);
    html
}

fn write_guide(out: &mut String, plates: &[Plate]) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html><head><meta charset=\"UTF-8\">")?;
    writeln!(out, "<title>{GUIDE_TITLE}</title>")?;
    writeln!(out, "<style>\n{STYLE}</style>")?;
    writeln!(out, "</head><body>")?;
    writeln!(out, "<h1>{GUIDE_TITLE}</h1>")?;

    for plate in plates {
        writeln!(
            out,
            "<div class=\"plate-block\"><h2>Plate {:02} <span class=\"page-braille\">({})</span></h2>",
            plate.number(),
            unicode_run(&plate.page_number_cells())
        )?;
        writeln!(out, "<table>")?;
        writeln!(out, "<tr><th>Line</th><th>Content</th></tr>")?;

        for (index, line) in plate.lines().iter().enumerate() {
            write!(out, "<tr><td align=\"center\" width=\"50\">L{}</td><td>", index + 1)?;
            for cell in line.cells() {
                write!(
                    out,
                    "<div class=\"cell\"><div class=\"dots\">{}</div><div class=\"glyph\">{}</div></div>",
                    cell.to_unicode(),
                    escape_html(cell.glyph())
                )?;
            }
            writeln!(out, "</td></tr>")?;
        }

        writeln!(out, "</table></div>")?;
    }

    writeln!(out, "</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenji_cells::{map, DotVector};
    use tenji_layout::{group_plates, split_lines, Line};

    #[test]
    fn test_one_section_per_plate() {
        let plates = group_plates(split_lines(&map("あいうえお"), 2), 2);
        let html = render_guide(&plates);
        assert_eq!(html.matches("<table>").count(), 2);
        assert!(html.contains("Plate 01 <span class=\"page-braille\">(⠼⠁)</span>"));
        assert!(html.contains("Plate 02 <span class=\"page-braille\">(⠼⠃)</span>"));
    }

    #[test]
    fn test_one_row_per_line() {
        let plates = group_plates(split_lines(&map("あいうえお"), 2), 3);
        let html = render_guide(&plates);
        assert!(html.contains(">L1<"));
        assert!(html.contains(">L3<"));
        assert!(!html.contains(">L4<"));
    }

    #[test]
    fn test_cell_shows_unicode_and_glyph() {
        let plates = group_plates(split_lines(&map("が"), 10), 1);
        let html = render_guide(&plates);
        // voiced indicator then か
        assert!(html.contains("<div class=\"dots\">⠐</div><div class=\"glyph\">゛</div>"));
        assert!(html.contains("<div class=\"dots\">⠡</div><div class=\"glyph\">か</div>"));
    }

    #[test]
    fn test_glyphs_are_escaped() {
        let line = Line::new(vec![BrailleCell::new(DotVector::with_dots(&[1]), "<&>")]);
        let html = render_guide(&[Plate::new(1, vec![line])]);
        assert!(html.contains("&lt;&amp;&gt;"));
        assert!(!html.contains("<&>"));
    }

    #[test]
    fn test_empty_guide_has_title() {
        let html = render_guide(&[]);
        assert!(html.contains("<h1>Tenji Fab Export Guide</h1>"));
        assert!(!html.contains("<table>"));
    }
}
