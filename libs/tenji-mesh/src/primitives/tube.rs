//! # Tube Primitive
//!
//! Open-bottomed annular ring standing on the plate around the mounting
//! hole. The bottom is left out because it sits flush on the plate top.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

/// Creates a tube from `z_base` to `z_base + height`.
///
/// # Arguments
///
/// * `center` - Axis position in the xy plane
/// * `z_base` - Height of the bottom edge
/// * `inner_radius`, `outer_radius` - Radii of the hole and the ring rim
/// * `height` - Extent along z
/// * `segments` - Number of segments around circumference
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use tenji_mesh::primitives::create_tube;
///
/// let mesh = create_tube(DVec2::new(6.5, 10.0), 0.6, 2.5, 4.0, 0.75, 32).unwrap();
/// assert_eq!(mesh.triangle_count(), 32 * 6);
/// ```
pub fn create_tube(
    center: DVec2,
    z_base: f64,
    inner_radius: f64,
    outer_radius: f64,
    height: f64,
    segments: u32,
) -> Result<TriangleMesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Tube height must be positive: {}",
            height
        )));
    }

    if inner_radius <= 0.0 || outer_radius <= inner_radius {
        return Err(MeshError::degenerate(format!(
            "Tube radii must satisfy 0 < inner < outer: inner={}, outer={}",
            inner_radius, outer_radius
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Tube segments must be at least 3: {}",
            segments
        )));
    }

    let top = z_base + height;
    let point = |radius: f64, j: u32, z: f64| {
        let theta = 2.0 * PI * f64::from(j) / f64::from(segments);
        DVec3::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
            z,
        )
    };

    let mut mesh = TriangleMesh::with_capacity(segments as usize * 6);
    for j in 0..segments {
        let (i1, i2) = (point(inner_radius, j, top), point(inner_radius, j + 1, top));
        let (o1, o2) = (point(outer_radius, j, top), point(outer_radius, j + 1, top));
        let (i1_base, i2_base) = (
            point(inner_radius, j, z_base),
            point(inner_radius, j + 1, z_base),
        );
        let (o1_base, o2_base) = (
            point(outer_radius, j, z_base),
            point(outer_radius, j + 1, z_base),
        );

        // Top rim
        mesh.add_triangle(o1, o2, i1);
        mesh.add_triangle(i1, o2, i2);

        // Outer wall
        mesh.add_triangle(o1_base, o2_base, o2);
        mesh.add_triangle(o1_base, o2, o1);

        // Inner wall
        mesh.add_triangle(i1_base, i1, i2_base);
        mesh.add_triangle(i2_base, i1, i2);
    }

    Ok(mesh)
}
