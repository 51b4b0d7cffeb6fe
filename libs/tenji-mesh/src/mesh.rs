//! # Mesh Data Structure
//!
//! Unindexed triangle soup. Every triangle owns its three vertices; nothing
//! is welded or shared, and nothing is mutated after it is appended.

use config::constants::STL_RECORD_LEN;
use glam::DVec3;

/// One oriented triangle.
///
/// Vertices are stored in f64; conversion to f32 only happens when the mesh
/// is serialized. The normal is advisory and may be zero for degenerate
/// triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: DVec3,
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle, deriving the normal from the winding order
    /// (counter-clockwise seen from the front).
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use tenji_mesh::Triangle;
    ///
    /// let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    /// assert_eq!(tri.normal, DVec3::Z);
    /// ```
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self {
            normal,
            vertices: [v0, v1, v2],
        }
    }
}

/// A growable list of triangles.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tenji_mesh::TriangleMesh;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_quad(
///     DVec3::ZERO,
///     DVec3::X,
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::Y,
/// );
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Appends a triangle given counter-clockwise vertices.
    pub fn add_triangle(&mut self, v0: DVec3, v1: DVec3, v2: DVec3) {
        self.triangles.push(Triangle::new(v0, v1, v2));
    }

    /// Appends a quad `a b c d` (counter-clockwise) as triangles `a b c`
    /// and `a c d`.
    pub fn add_quad(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Appends every triangle of another mesh.
    pub fn merge(&mut self, other: TriangleMesh) {
        self.triangles.extend(other.triangles);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or two zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.triangles.iter().flat_map(|tri| tri.vertices);
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Checks every vertex is finite.
    pub fn validate(&self) -> bool {
        self.triangles
            .iter()
            .all(|tri| tri.vertices.iter().all(|v| v.is_finite()))
    }

    /// Size in bytes of this mesh as binary STL.
    pub fn stl_len(&self) -> usize {
        config::constants::STL_HEADER_LEN + 4 + STL_RECORD_LEN * self.triangles.len()
    }
}

impl FromIterator<Triangle> for TriangleMesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triangle> for TriangleMesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(tri.normal, DVec3::ZERO);
    }

    #[test]
    fn test_quad_normals_agree() {
        let mut mesh = TriangleMesh::new();
        mesh.add_quad(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y);
        assert!(mesh.triangles().iter().all(|t| t.normal == DVec3::Z));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::ZERO,
        );
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_empty_bounding_box() {
        assert_eq!(TriangleMesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_merge_appends_in_order() {
        let mut mesh1 = TriangleMesh::new();
        mesh1.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        let mut mesh2 = TriangleMesh::new();
        mesh2.add_triangle(DVec3::Z, DVec3::new(1.0, 0.0, 1.0), DVec3::new(0.0, 1.0, 1.0));

        mesh1.merge(mesh2);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangles()[1].vertices[0], DVec3::Z);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert!(mesh.validate());
        mesh.add_triangle(DVec3::splat(f64::NAN), DVec3::X, DVec3::Y);
        assert!(!mesh.validate());
    }
}
