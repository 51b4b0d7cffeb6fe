//! # Tenji Layout
//!
//! Splits a flat sequence of braille cells into lines and plates.
//!
//! ## Architecture
//!
//! ```text
//! cells → Units (indicator + governed cell) → Lines (≤ max_chars) → Plates (≤ max_lines)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::LayoutSettings;
//! use tenji_cells::map;
//! use tenji_layout::paginate;
//!
//! let settings = LayoutSettings::new(4, 2, 0.6).unwrap();
//! let plates = paginate(&map("きょうはいいてんき"), &settings).unwrap();
//! assert_eq!(plates[0].number(), 1);
//! ```

pub mod line;
pub mod plate;
pub mod unit;

pub use line::{split_lines, Line};
pub use plate::{group_plates, paginate, Plate};
pub use unit::Units;
