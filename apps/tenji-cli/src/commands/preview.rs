//! `preview`: print plates as Unicode braille.

use crate::source::SourceArgs;
use anyhow::Result;
use std::fmt::Write;
use tenji_cells::flatten_words;
use tenji_layout::{paginate, Plate};

pub fn handle_preview(args: SourceArgs) -> Result<()> {
    let text = args.read_text()?;
    let settings = args.layout_settings()?;
    let words = args.words(&text)?;
    let plates = paginate(&flatten_words(&words), &settings)?;
    print!("{}", render_preview(&plates));
    Ok(())
}

/// One header per plate followed by its lines, plates separated by a blank line.
pub fn render_preview(plates: &[Plate]) -> String {
    let mut out = String::new();
    for (i, plate) in plates.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let page: String = plate
            .page_number_cells()
            .iter()
            .map(|cell| cell.to_unicode())
            .collect();
        let _ = writeln!(out, "Plate {:02} ({})", plate.number(), page);
        for line in plate.lines() {
            let _ = writeln!(out, "{}", line.to_unicode());
        }
    }
    out
}
