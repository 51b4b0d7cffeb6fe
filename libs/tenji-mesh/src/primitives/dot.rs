//! # Dot Primitive
//!
//! Raised braille dot: a flattened dome sitting on the plate.
//!
//! The profile follows a sphere segment cut at `flat_ratio` of a quarter
//! turn, rescaled so the top ring lands exactly at the requested height.
//! The open base rests on the plate surface.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use glam::{DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, PI};

/// Tessellation and shape parameters of a dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeShape {
    pub radius: f64,
    pub height: f64,
    pub segments: u32,
    pub rings: u32,
    pub flat_ratio: f64,
}

impl DomeShape {
    /// Number of triangles one dome produces.
    pub fn triangle_count(&self) -> usize {
        (self.segments as usize) * (2 * self.rings as usize + 1)
    }
}

/// Creates a dome whose base circle is centered at `center` on `z_base`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use tenji_mesh::primitives::{create_dot, DomeShape};
///
/// let shape = DomeShape { radius: 0.8, height: 0.75, segments: 24, rings: 6, flat_ratio: 0.5 };
/// let mesh = create_dot(DVec2::new(1.0, 1.0), 0.6, &shape).unwrap();
/// assert_eq!(mesh.triangle_count(), 312);
/// ```
pub fn create_dot(center: DVec2, z_base: f64, shape: &DomeShape) -> Result<TriangleMesh, MeshError> {
    if shape.radius <= 0.0 || shape.height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Dot radius and height must be positive: r={}, h={}",
            shape.radius, shape.height
        )));
    }

    if shape.segments < 3 || shape.rings == 0 {
        return Err(MeshError::degenerate(format!(
            "Dot needs at least 3 segments and 1 ring: segments={}, rings={}",
            shape.segments, shape.rings
        )));
    }

    if !(shape.flat_ratio > 0.0 && shape.flat_ratio <= 1.0) {
        return Err(MeshError::degenerate(format!(
            "Dot flat ratio must be in (0, 1]: {}",
            shape.flat_ratio
        )));
    }

    let theta_limit = FRAC_PI_2 * shape.flat_ratio;
    let z_scale = 1.0 / theta_limit.sin();

    let ring = |radius: f64, z: f64| -> Vec<DVec3> {
        (0..shape.segments)
            .map(|i| {
                let angle = 2.0 * PI * f64::from(i) / f64::from(shape.segments);
                DVec3::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                    z,
                )
            })
            .collect()
    };

    let count = shape.segments as usize;
    let mut mesh = TriangleMesh::with_capacity(shape.triangle_count());
    let mut lower = ring(shape.radius, z_base);

    for j in 1..=shape.rings {
        let theta = theta_limit * f64::from(j) / f64::from(shape.rings);
        let z = if j == shape.rings {
            z_base + shape.height
        } else {
            z_base + shape.height * theta.sin() * z_scale
        };
        let upper = ring(shape.radius * theta.cos(), z);

        for i in 0..count {
            let next = (i + 1) % count;
            mesh.add_triangle(lower[i], lower[next], upper[i]);
            mesh.add_triangle(upper[i], lower[next], upper[next]);
        }

        lower = upper;
    }

    // Cap
    let top = DVec3::new(center.x, center.y, z_base + shape.height);
    for i in 0..count {
        mesh.add_triangle(lower[i], lower[(i + 1) % count], top);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shape() -> DomeShape {
        DomeShape {
            radius: 0.8,
            height: 0.75,
            segments: 24,
            rings: 6,
            flat_ratio: 0.5,
        }
    }

    #[test]
    fn test_dot_bounds() {
        let mesh = create_dot(DVec2::new(3.0, 4.0), 1.0, &shape()).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, 1.0);
        assert_relative_eq!(max.z, 1.75, epsilon = 1e-12);
        assert_relative_eq!(min.x, 2.2, epsilon = 1e-9);
        assert_relative_eq!(max.x, 3.8, epsilon = 1e-9);
        assert!(mesh.validate());
    }

    #[test]
    fn test_dot_triangle_count() {
        let mesh = create_dot(DVec2::ZERO, 0.0, &shape()).unwrap();
        assert_eq!(mesh.triangle_count(), shape().triangle_count());
        assert_eq!(mesh.triangle_count(), 312);
    }

    #[test]
    fn test_dot_faces_outward() {
        let mesh = create_dot(DVec2::ZERO, 0.0, &shape()).unwrap();
        assert!(mesh
            .triangles()
            .iter()
            .filter(|t| t.normal != DVec3::ZERO)
            .all(|t| t.normal.z > 0.0));
    }

    #[test]
    fn test_dot_invalid() {
        let mut bad = shape();
        bad.flat_ratio = 0.0;
        assert!(create_dot(DVec2::ZERO, 0.0, &bad).is_err());
        let mut bad = shape();
        bad.rings = 0;
        assert!(create_dot(DVec2::ZERO, 0.0, &bad).is_err());
    }
}
