//! `export`: write the plate archive.

use crate::source::SourceArgs;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tenji_cells::flatten_words;
use tenji_layout::paginate;
use tenji_package::write_package;
use tracing::info;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Destination zip file
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

pub fn handle_export(args: ExportArgs) -> Result<()> {
    let text = args.source.read_text()?;
    let settings = args.source.layout_settings()?;
    let words = args.source.words(&text)?;

    let plates = paginate(&flatten_words(&words), &settings)?;
    info!(words = words.len(), plates = plates.len(), "laid out plates");

    write_package(&args.output, &plates, &text, settings.plate_thickness_mm)
        .with_context(|| format!("failed to export {}", args.output.display()))?;

    println!("{} plate(s) written to {}", plates.len(), args.output.display());
    Ok(())
}
