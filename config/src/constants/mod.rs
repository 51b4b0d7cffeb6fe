//! # Configuration Constants
//!
//! Centralized constants for the tenji-fab pipeline. All plate geometry,
//! tessellation parameters and layout defaults are defined here.
//!
//! ## Categories
//!
//! - **Dot geometry**: Size and spacing of the raised dots inside one cell
//! - **Plate layout**: Character pitch, line pitch and plate margins
//! - **Mounting hole**: Lanyard hole and its reinforcing ring
//! - **Tessellation**: Segment counts for arcs, rings and domes
//! - **Layout defaults**: Defaults and recommended ranges for `LayoutSettings`
//! - **Serialization**: Binary STL header and archive entry names

// =============================================================================
// DOT GEOMETRY CONSTANTS
// =============================================================================

/// Diameter of a raised dot at the plate surface (mm).
///
/// # Example
///
/// ```rust
/// use config::constants::{DOT_BASE_DIAMETER, DOT_PITCH_X};
///
/// // Adjacent dots never touch
/// assert!(DOT_BASE_DIAMETER < DOT_PITCH_X);
/// ```
pub const DOT_BASE_DIAMETER: f64 = 1.6;

/// Height of a raised dot above the plate surface (mm).
pub const DOT_HEIGHT: f64 = 0.75;

/// Horizontal distance between the left and right dot columns of a cell (mm).
pub const DOT_PITCH_X: f64 = 2.2;

/// Vertical distance between dot rows of a cell (mm).
pub const DOT_PITCH_Y: f64 = 2.4;

// =============================================================================
// PLATE LAYOUT CONSTANTS
// =============================================================================

/// Horizontal distance between the origins of consecutive cells (mm).
pub const CHAR_PITCH: f64 = 6.0;

/// Height of the band reserved for one line of cells (mm).
pub const LINE_HEIGHT: f64 = 10.0;

/// Vertical distance between the centres of consecutive lines (mm).
///
/// # Example
///
/// ```rust
/// use config::constants::{LINE_HEIGHT, LINE_PITCH};
///
/// // Line bands never overlap
/// assert!(LINE_PITCH >= LINE_HEIGHT);
/// ```
pub const LINE_PITCH: f64 = 12.0;

/// Top plate margin (mm).
pub const MARGIN_TOP: f64 = 4.0;

/// Bottom plate margin (mm).
pub const MARGIN_BOTTOM: f64 = 4.0;

/// Left plate margin (mm).
pub const MARGIN_LEFT: f64 = 4.0;

/// Right plate margin (mm).
pub const MARGIN_RIGHT: f64 = 4.0;

/// Radius of the rounded plate corners (mm).
pub const PLATE_CORNER_RADIUS: f64 = 3.0;

/// Minimum width of the left-hand column holding the hole and page number (mm).
pub const MIN_LEFT_COLUMN_WIDTH: f64 = 15.0;

/// Clearance added around the reinforced hole when sizing the left column
/// and the minimum plate height (mm).
pub const HOLE_CLEARANCE: f64 = 4.0;

// =============================================================================
// MOUNTING HOLE CONSTANTS
// =============================================================================

/// Diameter of the lanyard / binding hole (mm).
pub const HOLE_DIAMETER: f64 = 5.0;

/// Radius of the lanyard / binding hole (mm).
pub const HOLE_RADIUS: f64 = HOLE_DIAMETER / 2.0;

/// Wall width of the reinforcing tube around the hole (mm).
///
/// # Example
///
/// ```rust
/// use config::constants::{HOLE_RADIUS, HOLE_RING_WIDTH};
///
/// let outer_radius = HOLE_RADIUS + HOLE_RING_WIDTH;
/// assert_eq!(outer_radius, 4.0);
/// ```
pub const HOLE_RING_WIDTH: f64 = 1.5;

/// Height of the reinforcing tube above the plate surface (mm).
///
/// The tube rises to the same height as the dots so that stacked plates rest
/// on the tube instead of flattening the dots.
pub const HOLE_RING_HEIGHT: f64 = DOT_HEIGHT;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of arc segments per rounded plate corner.
///
/// Each corner contributes `PLATE_CORNER_SEGMENTS + 1` points to the outer
/// boundary polyline.
pub const PLATE_CORNER_SEGMENTS: u32 = 32;

/// Number of segments around the reinforcing tube.
pub const TUBE_SEGMENTS: u32 = 32;

/// Number of segments around each raised dot.
pub const DOT_SEGMENTS: u32 = 24;

/// Number of rings stacked from the dot base to its cap.
pub const DOT_RINGS: u32 = 6;

/// Fraction of a quarter turn swept by the dome profile.
///
/// `1.0` would be a full hemisphere; smaller values give a flatter dome
/// whose cap is a wide disc instead of a point.
///
/// # Example
///
/// ```rust
/// use config::constants::DOT_FLAT_RATIO;
/// assert!(DOT_FLAT_RATIO > 0.0 && DOT_FLAT_RATIO <= 1.0);
/// ```
pub const DOT_FLAT_RATIO: f64 = 0.5;

/// Distance substituted when an outer boundary point coincides with the
/// hole centre during radial projection (mm).
pub const PROJECTION_EPSILON: f64 = 0.001;

// =============================================================================
// LAYOUT DEFAULTS
// =============================================================================

/// Default number of cells per line.
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 10;

/// Default number of lines per plate.
pub const DEFAULT_MAX_LINES_PER_PLATE: usize = 4;

/// Default plate thickness (mm).
pub const DEFAULT_PLATE_THICKNESS_MM: f64 = 0.6;

/// Recommended range for cells per line. Values outside are accepted.
pub const RECOMMENDED_CHARS_PER_LINE: (usize, usize) = (5, 30);

/// Recommended range for lines per plate. Values outside are accepted.
pub const RECOMMENDED_LINES_PER_PLATE: (usize, usize) = (1, 20);

/// Recommended range for plate thickness (mm). Values outside are accepted.
pub const RECOMMENDED_PLATE_THICKNESS_MM: (f64, f64) = (0.4, 2.0);

// =============================================================================
// SERIALIZATION CONSTANTS
// =============================================================================

/// Free-form text written at the start of every binary STL header.
///
/// Held constant so that re-exporting identical input is byte-identical.
pub const STL_HEADER_TEXT: &[u8] = b"Tenji Fab Generated STL";

/// Size of the binary STL header in bytes.
pub const STL_HEADER_LEN: usize = 80;

/// Size of one binary STL triangle record in bytes.
pub const STL_RECORD_LEN: usize = 50;

/// Archive entry holding the raw input text.
pub const ORIGINAL_TEXT_ENTRY: &str = "original_text.txt";

/// Archive entry holding the ASCII-braille transcript.
pub const TRANSCRIPT_ENTRY: &str = "braille.bse";

/// Archive entry holding the HTML guide.
pub const GUIDE_ENTRY: &str = "guide_sheet.html";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the archive entry name of the mesh for a 1-based page number.
///
/// # Example
///
/// ```rust
/// use config::constants::plate_entry_name;
///
/// assert_eq!(plate_entry_name(1), "plate_01.stl");
/// assert_eq!(plate_entry_name(12), "plate_12.stl");
/// assert_eq!(plate_entry_name(123), "plate_123.stl");
/// ```
pub fn plate_entry_name(page_number: usize) -> String {
    format!("plate_{page_number:02}.stl")
}
