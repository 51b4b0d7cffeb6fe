//! # Plate Body
//!
//! Rounded-rectangle prism pierced by a circular hole.
//!
//! The hole boundary has exactly as many points as the outer boundary: each
//! outer point is projected radially onto the hole circle. The annulus
//! between the two polylines is then stitched with one quad per outer edge,
//! for the top face, the bottom face and both side walls.

use config::constants::PROJECTION_EPSILON;
use glam::{DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

use crate::error::MeshError;
use crate::mesh::TriangleMesh;

/// Outline of a rounded rectangle with its lower-left corner at the origin,
/// traversed counter-clockwise starting at the top-right corner arc.
///
/// Each corner contributes `segments_per_corner + 1` points.
///
/// # Example
///
/// ```rust
/// use tenji_mesh::primitives::rounded_rect_path;
///
/// let path = rounded_rect_path(20.0, 10.0, 3.0, 8);
/// assert_eq!(path.len(), 36);
/// ```
pub fn rounded_rect_path(
    width: f64,
    height: f64,
    radius: f64,
    segments_per_corner: u32,
) -> Vec<DVec2> {
    let corners = [
        DVec2::new(width - radius, height - radius),
        DVec2::new(radius, height - radius),
        DVec2::new(radius, radius),
        DVec2::new(width - radius, radius),
    ];
    let steps = segments_per_corner.max(1);

    let mut points = Vec::with_capacity(4 * (steps as usize + 1));
    for (quadrant, center) in corners.iter().enumerate() {
        let start = FRAC_PI_2 * quadrant as f64;
        for i in 0..=steps {
            let angle = start + FRAC_PI_2 * f64::from(i) / f64::from(steps);
            points.push(*center + radius * DVec2::new(angle.cos(), angle.sin()));
        }
    }
    points
}

/// Projects each point radially onto the circle of `radius` around `center`.
///
/// A point sitting on the centre is treated as lying a tiny distance away
/// along +x, since it has no direction of its own.
pub fn project_onto_circle(points: &[DVec2], center: DVec2, radius: f64) -> Vec<DVec2> {
    points
        .iter()
        .map(|&p| {
            let offset = p - center;
            let distance = offset.length();
            let direction = if distance == 0.0 {
                DVec2::new(PROJECTION_EPSILON, 0.0) / PROJECTION_EPSILON
            } else {
                offset / distance
            };
            center + direction * radius
        })
        .collect()
}

/// Creates the plate body: a `width × height × depth` rounded-rectangle
/// prism from `z = 0` to `z = depth` with a hole through it.
///
/// # Arguments
///
/// * `width`, `height` - Outer extent in x and y
/// * `depth` - Plate thickness along z
/// * `corner_radius` - Radius of the rounded corners
/// * `segments_per_corner` - Arc segments per corner
/// * `hole_center`, `hole_radius` - The mounting hole
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use tenji_mesh::primitives::create_plate_body;
///
/// let mesh = create_plate_body(40.0, 20.0, 1.0, 3.0, 8, DVec2::new(8.0, 12.0), 2.5).unwrap();
/// assert_eq!(mesh.triangle_count(), 36 * 8);
/// ```
pub fn create_plate_body(
    width: f64,
    height: f64,
    depth: f64,
    corner_radius: f64,
    segments_per_corner: u32,
    hole_center: DVec2,
    hole_radius: f64,
) -> Result<TriangleMesh, MeshError> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Plate extent must be positive: {}x{}x{}",
            width, height, depth
        )));
    }

    if corner_radius < 0.0 || 2.0 * corner_radius > width.min(height) {
        return Err(MeshError::degenerate(format!(
            "Corner radius {} does not fit a {}x{} plate",
            corner_radius, width, height
        )));
    }

    if hole_radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Hole radius must be positive: {}",
            hole_radius
        )));
    }

    let outer = rounded_rect_path(width, height, corner_radius, segments_per_corner);
    let inner = project_onto_circle(&outer, hole_center, hole_radius);
    let count = outer.len();

    let mut mesh = TriangleMesh::with_capacity(count * 8);
    let at = |p: DVec2, z: f64| DVec3::new(p.x, p.y, z);

    for i in 0..count {
        let next = (i + 1) % count;
        let (o1, o2) = (outer[i], outer[next]);
        let (i1, i2) = (inner[i], inner[next]);

        // Top face, facing +z
        mesh.add_triangle(at(o1, depth), at(o2, depth), at(i1, depth));
        mesh.add_triangle(at(i1, depth), at(o2, depth), at(i2, depth));

        // Bottom face, facing -z
        mesh.add_triangle(at(o1, 0.0), at(i1, 0.0), at(o2, 0.0));
        mesh.add_triangle(at(i1, 0.0), at(i2, 0.0), at(o2, 0.0));

        // Outer wall, facing away from the plate
        mesh.add_quad(at(o1, 0.0), at(o2, 0.0), at(o2, depth), at(o1, depth));

        // Hole wall, facing into the hole
        mesh.add_triangle(at(i1, 0.0), at(i1, depth), at(i2, 0.0));
        mesh.add_triangle(at(i2, 0.0), at(i1, depth), at(i2, depth));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rounded_rect_extent() {
        let path = rounded_rect_path(30.0, 12.0, 3.0, 16);
        let min = path.iter().fold(DVec2::splat(f64::MAX), |m, p| m.min(*p));
        let max = path.iter().fold(DVec2::splat(f64::MIN), |m, p| m.max(*p));
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rounded_rect_is_counter_clockwise() {
        let path = rounded_rect_path(30.0, 12.0, 3.0, 8);
        let signed_area: f64 = path
            .iter()
            .zip(path.iter().cycle().skip(1))
            .map(|(a, b)| a.perp_dot(*b))
            .sum::<f64>()
            / 2.0;
        assert!(signed_area > 0.0);
    }

    #[test]
    fn test_projection_lands_on_circle() {
        let center = DVec2::new(5.0, 5.0);
        let points = [DVec2::new(10.0, 5.0), DVec2::new(0.0, 0.0), center];
        for p in project_onto_circle(&points, center, 2.0) {
            assert_relative_eq!(p.distance(center), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_body_faces() {
        let mesh =
            create_plate_body(40.0, 20.0, 1.0, 3.0, 4, DVec2::new(6.0, 14.0), 2.5).unwrap();
        assert!(mesh.validate());
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 1.0);
        let up = mesh.triangles().iter().filter(|t| t.normal.z > 0.99).count();
        let down = mesh.triangles().iter().filter(|t| t.normal.z < -0.99).count();
        assert_eq!(up, down);
        assert_eq!(up, 2 * 20);
    }

    #[test]
    fn test_hole_wall_faces_the_hole() {
        let center = DVec2::new(6.0, 14.0);
        let mesh = create_plate_body(40.0, 20.0, 1.0, 3.0, 4, center, 2.5).unwrap();
        for tri in mesh.triangles().iter().skip(6).step_by(8) {
            let centroid = (tri.vertices[0] + tri.vertices[1] + tri.vertices[2]) / 3.0;
            let towards_center = DVec3::new(center.x - centroid.x, center.y - centroid.y, 0.0);
            assert!(tri.normal.dot(towards_center) > 0.0);
        }
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        let hole = DVec2::new(6.0, 6.0);
        assert!(create_plate_body(0.0, 20.0, 1.0, 3.0, 4, hole, 2.5).is_err());
        assert!(create_plate_body(40.0, 20.0, 1.0, 11.0, 4, hole, 2.5).is_err());
        assert!(create_plate_body(40.0, 20.0, 1.0, 3.0, 4, hole, 0.0).is_err());
    }
}
