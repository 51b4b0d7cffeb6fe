//! Tenji Fab CLI
//!
//! Converts Japanese text into embossed braille plates.
//!
//! # Commands
//!
//! - `export`: Write the zip archive with one STL per plate, transcript and guide
//! - `preview`: Print the plates as Unicode braille
//! - `words`: Print the mapped words as JSON

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod source;

/// Tenji Fab - braille plate generator
#[derive(Parser)]
#[command(name = "tenji-fab")]
#[command(version)]
#[command(about = "Convert Japanese text into 3D-printable braille plates")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export plates as a zip archive
    ///
    /// The archive holds the original text, a braille transcript (.bse),
    /// an HTML guide sheet and one binary STL per plate.
    Export(commands::export::ExportArgs),
    /// Print the plates as Unicode braille lines
    Preview(source::SourceArgs),
    /// Print the converted words with readings, cells and spans as JSON
    Words(source::SourceArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Export(args) => commands::export::handle_export(args),
        Commands::Preview(args) => commands::preview::handle_preview(args),
        Commands::Words(args) => commands::words::handle_words(args),
    }
}
