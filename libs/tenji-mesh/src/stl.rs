//! # Binary STL
//!
//! Little-endian binary STL: an 80-byte header, a `u32` triangle count and
//! one 50-byte record per triangle (normal, three vertices, `u16` attribute).
//! Coordinates are narrowed from f64 to f32 on the way out.

use crate::error::MeshError;
use crate::mesh::{Triangle, TriangleMesh};
use config::constants::{STL_HEADER_LEN, STL_HEADER_TEXT, STL_RECORD_LEN};
use glam::Vec3;
use std::io::Write;

/// Size of the header plus the triangle count field.
const PREAMBLE_LEN: usize = STL_HEADER_LEN + 4;

/// Serializes a mesh to binary STL bytes.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tenji_mesh::{stl, TriangleMesh};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// let bytes = stl::serialize(&mesh).unwrap();
/// assert_eq!(bytes.len(), 84 + 50);
/// ```
pub fn serialize(mesh: &TriangleMesh) -> Result<Vec<u8>, MeshError> {
    let mut bytes = Vec::with_capacity(mesh.stl_len());
    write_stl(&mut bytes, mesh)?;
    Ok(bytes)
}

/// Writes a mesh as binary STL to any writer.
pub fn write_stl<W: Write>(writer: &mut W, mesh: &TriangleMesh) -> Result<(), MeshError> {
    let count = u32::try_from(mesh.triangle_count()).map_err(|_| MeshError::TooManyTriangles {
        count: mesh.triangle_count(),
        max: u32::MAX as usize,
    })?;

    let mut header = [0u8; STL_HEADER_LEN];
    header[..STL_HEADER_TEXT.len()].copy_from_slice(STL_HEADER_TEXT);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; STL_RECORD_LEN];
    for tri in mesh.triangles() {
        encode_record(tri, &mut record);
        writer.write_all(&record)?;
    }

    Ok(())
}

fn encode_record(tri: &Triangle, record: &mut [u8; STL_RECORD_LEN]) {
    let vectors = [tri.normal, tri.vertices[0], tri.vertices[1], tri.vertices[2]];
    for (slot, v) in vectors.iter().enumerate() {
        for (axis, value) in v.as_vec3().to_array().into_iter().enumerate() {
            let at = slot * 12 + axis * 4;
            record[at..at + 4].copy_from_slice(&value.to_le_bytes());
        }
    }
    // Attribute byte count
    record[48..50].copy_from_slice(&0u16.to_le_bytes());
}

/// Parses binary STL bytes back into a mesh.
///
/// Normals are recomputed from the winding of the stored vertices. Returns
/// [`MeshError::Truncated`] when the data is shorter than its triangle count
/// requires.
pub fn parse(bytes: &[u8]) -> Result<TriangleMesh, MeshError> {
    if bytes.len() < PREAMBLE_LEN {
        return Err(MeshError::Truncated {
            expected: PREAMBLE_LEN,
            actual: bytes.len(),
        });
    }

    let mut count_bytes = [0u8; 4];
    count_bytes.copy_from_slice(&bytes[STL_HEADER_LEN..PREAMBLE_LEN]);
    let count = u32::from_le_bytes(count_bytes) as usize;

    let expected = PREAMBLE_LEN + count * STL_RECORD_LEN;
    if bytes.len() < expected {
        return Err(MeshError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes[PREAMBLE_LEN..expected]
        .chunks_exact(STL_RECORD_LEN)
        .map(|record| {
            let vertex = |slot: usize| read_vec3(&record[slot * 12..slot * 12 + 12]).as_dvec3();
            Triangle::new(vertex(1), vertex(2), vertex(3))
        })
        .collect())
}

fn read_vec3(bytes: &[u8]) -> Vec3 {
    let mut values = [0f32; 3];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(chunk);
        *value = f32::from_le_bytes(raw);
    }
    Vec3::from_array(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn single_triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        mesh
    }

    #[test]
    fn test_empty_mesh() {
        let bytes = serialize(&TriangleMesh::new()).unwrap();
        assert_eq!(bytes.len(), 84);
        assert_eq!(&bytes[80..84], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_header_is_padded_text() {
        let bytes = serialize(&single_triangle()).unwrap();
        assert!(bytes.starts_with(STL_HEADER_TEXT));
        assert!(bytes[STL_HEADER_TEXT.len()..80].iter().all(|&b| b == 0));
        assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 1);
    }

    #[test]
    fn test_record_layout() {
        let bytes = serialize(&single_triangle()).unwrap();
        // normal is +z
        assert_eq!(read_vec3(&bytes[84..96]), Vec3::Z);
        // second vertex x coordinate
        let at = 84 + 12 + 12;
        assert_eq!(&bytes[at..at + 4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[132..134], &[0, 0]);
    }

    #[test]
    fn test_length_formula() {
        let mut mesh = TriangleMesh::new();
        for i in 0..7 {
            let offset = DVec3::splat(i as f64);
            mesh.add_triangle(offset, offset + DVec3::X, offset + DVec3::Y);
        }
        let bytes = serialize(&mesh).unwrap();
        assert_eq!(bytes.len(), 84 + 50 * 7);
        assert_eq!(bytes.len(), mesh.stl_len());
    }

    #[test]
    fn test_parse_restores_vertices() {
        let bytes = serialize(&single_triangle()).unwrap();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed, single_triangle());
    }

    #[test]
    fn test_parse_rejects_truncated() {
        let bytes = serialize(&single_triangle()).unwrap();
        match parse(&bytes[..100]) {
            Err(MeshError::Truncated { expected, actual }) => {
                assert_eq!(expected, 134);
                assert_eq!(actual, 100);
            }
            other => panic!("expected truncation error, got {other:?}"),
        }
        assert!(matches!(parse(&bytes[..10]), Err(MeshError::Truncated { .. })));
    }

    #[test]
    fn test_write_to_writer() {
        let mut out = Vec::new();
        write_stl(&mut out, &single_triangle()).unwrap();
        assert_eq!(out, serialize(&single_triangle()).unwrap());
    }
}
