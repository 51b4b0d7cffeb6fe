//! # Tenji Mesh
//!
//! Triangle meshes for embossed braille plates and their binary STL form.
//!
//! ## Architecture
//!
//! ```text
//! tenji-layout (Lines + page number) → tenji-mesh (TriangleMesh) → STL bytes
//! ```
//!
//! ## Geometry
//!
//! - **Body**: rounded-rectangle prism with a radially stitched mounting hole
//! - **Tube**: reinforcing ring around the hole, as tall as the dots
//! - **Dots**: flattened domes placed per cell, per line and for the page number
//!
//! ## Usage
//!
//! ```rust
//! use tenji_cells::map;
//! use tenji_layout::Line;
//! use tenji_mesh::{build_plate_mesh, stl};
//!
//! let lines = vec![Line::new(map("あい"))];
//! let mesh = build_plate_mesh(&lines, &map("1"), 0.6).unwrap();
//! let bytes = stl::serialize(&mesh).unwrap();
//! assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
//! ```

pub mod cell;
pub mod error;
pub mod mesh;
pub mod plate;
pub mod primitives;
pub mod stl;

pub use error::MeshError;
pub use mesh::{Triangle, TriangleMesh};
pub use plate::{build_plate_mesh, PlateDimensions};

#[cfg(test)]
mod tests;
