//! # Primitives
//!
//! Mesh generation for the plate body, the hole tube and raised dots.

pub mod body;
pub mod dot;
pub mod tube;

pub use body::{create_plate_body, project_onto_circle, rounded_rect_path};
pub use dot::{create_dot, DomeShape};
pub use tube::create_tube;
