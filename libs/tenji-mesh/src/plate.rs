//! # Plate Builder
//!
//! Assembles the complete mesh of one plate: body with mounting hole,
//! reinforcing tube, page number and body text.
//!
//! ## Layout
//!
//! ```text
//!  ┌──────────────┬──────────────────────────────┐
//!  │  (○) hole    │ line 1  ⠁⠃⠉ ...              │
//!  │              │ line 2                       │
//!  │  #1 page no. │ line n                       │
//!  └──────────────┴──────────────────────────────┘
//!   left column     body: longest line × char pitch
//! ```

use crate::cell::add_cell;
use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use crate::primitives::{create_plate_body, create_tube};
use config::constants::{
    CHAR_PITCH, DOT_PITCH_Y, HOLE_CLEARANCE, HOLE_DIAMETER, HOLE_RADIUS, HOLE_RING_HEIGHT,
    HOLE_RING_WIDTH, LINE_HEIGHT, LINE_PITCH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT,
    MARGIN_TOP, MIN_LEFT_COLUMN_WIDTH, PLATE_CORNER_RADIUS, PLATE_CORNER_SEGMENTS,
    TUBE_SEGMENTS,
};
use glam::DVec2;
use tenji_cells::BrailleCell;
use tenji_layout::Line;
use tracing::debug;

/// Outer extent of a plate and the positions of its fixed features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateDimensions {
    pub width: f64,
    pub height: f64,
    pub left_column_width: f64,
    pub hole_center: DVec2,
}

impl PlateDimensions {
    /// Computes the plate extent for `line_count` lines whose longest line
    /// holds `widest_line` cells, with a page number of `page_cells` cells.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenji_mesh::PlateDimensions;
    ///
    /// let dims = PlateDimensions::compute(1, 2, 2);
    /// assert_eq!(dims.left_column_width, 15.0);
    /// assert_eq!(dims.width, 4.0 + 15.0 + 12.0 + 4.0);
    /// assert_eq!(dims.height, 18.0);
    /// ```
    pub fn compute(line_count: usize, widest_line: usize, page_cells: usize) -> Self {
        let ring_radius = HOLE_RADIUS + HOLE_RING_WIDTH;
        let left_column_width = (HOLE_DIAMETER + 2.0 * HOLE_RING_WIDTH + HOLE_CLEARANCE)
            .max(page_cells as f64 * CHAR_PITCH)
            .max(MIN_LEFT_COLUMN_WIDTH);

        let width =
            MARGIN_LEFT + left_column_width + widest_line as f64 * CHAR_PITCH + MARGIN_RIGHT;
        let height = (MARGIN_TOP
            + LINE_HEIGHT
            + line_count.saturating_sub(1) as f64 * LINE_PITCH
            + MARGIN_BOTTOM)
            .max(2.0 * ring_radius + HOLE_CLEARANCE);

        let hole_center = DVec2::new(
            MARGIN_LEFT + ring_radius,
            height - (MARGIN_TOP + ring_radius),
        );

        Self {
            width,
            height,
            left_column_width,
            hole_center,
        }
    }

    /// Lower-left origin of the first cell of body line `index` (0 = top).
    pub fn line_origin(&self, index: usize) -> DVec2 {
        let center_y = self.height - MARGIN_TOP - LINE_HEIGHT / 2.0 - index as f64 * LINE_PITCH;
        DVec2::new(MARGIN_LEFT + self.left_column_width, center_y - DOT_PITCH_Y)
    }

    /// Lower-left origin of the first page number cell, centred in the left
    /// column on the bottom line band.
    pub fn page_number_origin(&self, page_cells: usize) -> DVec2 {
        let content_width = page_cells as f64 * CHAR_PITCH;
        let mut x = MARGIN_LEFT;
        if content_width < self.left_column_width {
            x += (self.left_column_width - content_width) / 2.0;
        }
        DVec2::new(x, MARGIN_BOTTOM + LINE_HEIGHT / 2.0 - DOT_PITCH_Y)
    }
}

/// Builds the mesh of one plate.
///
/// The page number is embossed only when the plate has more than one line.
/// Lines without cells contribute no dot geometry. `thickness` must be positive and
/// finite.
///
/// # Example
///
/// ```rust
/// use tenji_cells::map;
/// use tenji_layout::Line;
/// use tenji_mesh::build_plate_mesh;
///
/// let lines = vec![Line::new(map("1"))];
/// let mesh = build_plate_mesh(&lines, &map("1"), 0.6).unwrap();
/// assert_eq!(mesh.triangle_count(), 1056 + 192 + 5 * 312);
/// ```
pub fn build_plate_mesh(
    lines: &[Line],
    page_number_cells: &[BrailleCell],
    thickness: f64,
) -> Result<TriangleMesh, MeshError> {
    let widest = lines.iter().map(Line::len).max().unwrap_or(0);
    let dims = PlateDimensions::compute(lines.len(), widest, page_number_cells.len());

    let mut mesh = create_plate_body(
        dims.width,
        dims.height,
        thickness,
        PLATE_CORNER_RADIUS,
        PLATE_CORNER_SEGMENTS,
        dims.hole_center,
        HOLE_RADIUS,
    )?;

    mesh.merge(create_tube(
        dims.hole_center,
        thickness,
        HOLE_RADIUS,
        HOLE_RADIUS + HOLE_RING_WIDTH,
        HOLE_RING_HEIGHT,
        TUBE_SEGMENTS,
    )?);

    if lines.len() > 1 {
        let origin = dims.page_number_origin(page_number_cells.len());
        add_row(&mut mesh, page_number_cells, origin, thickness)?;
    }

    for (index, line) in lines.iter().enumerate() {
        add_row(&mut mesh, line.cells(), dims.line_origin(index), thickness)?;
    }

    if !mesh.validate() {
        return Err(MeshError::validation(format!(
            "plate mesh has non-finite vertices (thickness {})",
            thickness
        )));
    }

    debug!(
        lines = lines.len(),
        width = dims.width,
        height = dims.height,
        triangles = mesh.triangle_count(),
        "built plate mesh"
    );

    Ok(mesh)
}

fn add_row(
    mesh: &mut TriangleMesh,
    cells: &[BrailleCell],
    origin: DVec2,
    z_base: f64,
) -> Result<(), MeshError> {
    for (column, cell) in cells.iter().enumerate() {
        let cell_origin = origin + DVec2::new(column as f64 * CHAR_PITCH, 0.0);
        add_cell(mesh, cell.dots(), cell_origin, z_base)?;
    }
    Ok(())
}
