//! # Cell Geometry
//!
//! Places the raised dots of one braille cell.
//!
//! A cell is anchored at its lower-left origin. Dots 1-3 form the left
//! column from top to bottom and dots 4-6 the right column; each dot's base
//! circle touches the cell origin lines, so its centre sits half a diameter
//! in from the offset point.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use crate::primitives::{create_dot, DomeShape};
use config::constants::{
    DOT_BASE_DIAMETER, DOT_FLAT_RATIO, DOT_HEIGHT, DOT_PITCH_X, DOT_PITCH_Y, DOT_RINGS,
    DOT_SEGMENTS,
};
use glam::DVec2;
use tenji_cells::DotVector;

/// Offset of each dot position from the cell origin, indexed by dot number - 1.
pub const DOT_OFFSETS: [DVec2; 6] = [
    DVec2::new(0.0, 2.0 * DOT_PITCH_Y),
    DVec2::new(0.0, DOT_PITCH_Y),
    DVec2::new(0.0, 0.0),
    DVec2::new(DOT_PITCH_X, 2.0 * DOT_PITCH_Y),
    DVec2::new(DOT_PITCH_X, DOT_PITCH_Y),
    DVec2::new(DOT_PITCH_X, 0.0),
];

/// The dome every raised dot is built from.
pub const STANDARD_DOT: DomeShape = DomeShape {
    radius: DOT_BASE_DIAMETER / 2.0,
    height: DOT_HEIGHT,
    segments: DOT_SEGMENTS,
    rings: DOT_RINGS,
    flat_ratio: DOT_FLAT_RATIO,
};

/// Centres of the raised dots of `dots` for a cell anchored at `origin`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use tenji_cells::DotVector;
/// use tenji_mesh::cell::dot_centers;
///
/// let centers = dot_centers(DotVector::with_dots(&[3]), DVec2::ZERO);
/// assert_eq!(centers, vec![DVec2::new(0.8, 0.8)]);
/// ```
pub fn dot_centers(dots: DotVector, origin: DVec2) -> Vec<DVec2> {
    let half = DVec2::splat(DOT_BASE_DIAMETER / 2.0);
    dots.raised()
        .map(|index| origin + DOT_OFFSETS[index] + half)
        .collect()
}

/// Appends the dots of one cell standing on `z_base` to `mesh`.
///
/// A blank cell adds nothing.
pub fn add_cell(
    mesh: &mut TriangleMesh,
    dots: DotVector,
    origin: DVec2,
    z_base: f64,
) -> Result<(), MeshError> {
    for center in dot_centers(dots, origin) {
        mesh.merge(create_dot(center, z_base, &STANDARD_DOT)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_cell_layout() {
        let centers = dot_centers(DotVector::from_bits(0x3F), DVec2::new(10.0, 20.0));
        assert_eq!(centers.len(), 6);
        // dot 1 is top-left, dot 6 is bottom-right
        assert_relative_eq!(centers[0].x, 10.8);
        assert_relative_eq!(centers[0].y, 25.6, epsilon = 1e-12);
        assert_relative_eq!(centers[5].x, 13.0, epsilon = 1e-12);
        assert_relative_eq!(centers[5].y, 20.8);
    }

    #[test]
    fn test_blank_cell_adds_nothing() {
        let mut mesh = TriangleMesh::new();
        add_cell(&mut mesh, DotVector::EMPTY, DVec2::ZERO, 1.0).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_cell_triangle_count() {
        let mut mesh = TriangleMesh::new();
        add_cell(&mut mesh, DotVector::with_dots(&[1, 2, 4]), DVec2::ZERO, 1.0).unwrap();
        assert_eq!(mesh.triangle_count(), 3 * STANDARD_DOT.triangle_count());
    }
}
