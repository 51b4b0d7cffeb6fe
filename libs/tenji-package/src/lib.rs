//! # Tenji Package
//!
//! Turns paginated braille plates into the downloadable archive.
//!
//! ## Architecture
//!
//! ```text
//! Plates ─┬─ transcript  → braille.bse
//!         ├─ guide       → guide_sheet.html
//!         └─ tenji-mesh  → plate_NN.stl (one per plate, in parallel)
//!                          + original_text.txt → zip → atomic write
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::LayoutSettings;
//! use tenji_cells::map;
//! use tenji_layout::paginate;
//!
//! let plates = paginate(&map("1"), &LayoutSettings::default()).unwrap();
//! let bytes = tenji_package::export(&plates, "1", 0.6).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

pub mod archive;
pub mod error;
pub mod guide;
pub mod transcript;

pub use archive::{build_archive, write_atomic, Entry};
pub use error::PackageError;
pub use guide::render_guide;
pub use transcript::render_transcript;

use config::constants::{plate_entry_name, GUIDE_ENTRY, ORIGINAL_TEXT_ENTRY, TRANSCRIPT_ENTRY};
use config::settings::validate_thickness;
use config::LayoutSettings;
use rayon::prelude::*;
use std::path::Path;
use tenji_cells::{flatten_words, MappedWord};
use tenji_layout::{paginate, Plate};
use tenji_mesh::{build_plate_mesh, stl};
use tracing::debug;

/// Builds the STL entry of every plate, in page order.
///
/// Plates are meshed and serialized in parallel. A failure on any plate
/// fails the whole call.
pub fn plate_entries(plates: &[Plate], thickness: f64) -> Result<Vec<Entry>, PackageError> {
    plates
        .par_iter()
        .map(|plate| -> Result<Entry, PackageError> {
            let bytes = build_plate_mesh(plate.lines(), &plate.page_number_cells(), thickness)
                .and_then(|mesh| stl::serialize(&mesh))
                .map_err(|source| PackageError::Mesh {
                    plate: plate.number(),
                    source,
                })?;
            Ok(Entry::new(plate_entry_name(plate.number()), bytes))
        })
        .collect()
}

/// Exports plates as zip archive bytes.
///
/// Entries, in order: `original_text.txt`, `braille.bse`,
/// `guide_sheet.html`, then `plate_01.stl`, `plate_02.stl`, …
/// The result depends only on the inputs.
pub fn export(plates: &[Plate], original_text: &str, thickness: f64) -> Result<Vec<u8>, PackageError> {
    validate_thickness(thickness)?;

    let mut entries = vec![
        Entry::new(ORIGINAL_TEXT_ENTRY, original_text),
        Entry::new(TRANSCRIPT_ENTRY, render_transcript(plates)),
        Entry::new(GUIDE_ENTRY, render_guide(plates)),
    ];
    entries.extend(plate_entries(plates, thickness)?);

    debug!(plates = plates.len(), entries = entries.len(), "assembled package");
    build_archive(&entries)
}

/// Exports plates and writes the archive to `path` atomically.
pub fn write_package(
    path: &Path,
    plates: &[Plate],
    original_text: &str,
    thickness: f64,
) -> Result<(), PackageError> {
    let bytes = export(plates, original_text, thickness)?;
    write_atomic(path, &bytes)
}

/// Lays out mapped words under `settings` and exports the result.
///
/// Words are joined with a blank cell between them before pagination.
pub fn export_words(
    words: &[MappedWord],
    original_text: &str,
    settings: &LayoutSettings,
) -> Result<Vec<u8>, PackageError> {
    let plates = paginate(&flatten_words(words), settings)?;
    export(&plates, original_text, settings.plate_thickness_mm)
}
