//! # Plate Mesh Tests
//!
//! Whole-plate geometry: triangle budgets, bounds and feature placement.

use crate::*;
use approx::assert_relative_eq;
use glam::DVec2;
use tenji_cells::{map, page_number_cells, BrailleCell, DotVector};
use tenji_layout::Line;

const BODY_TRIANGLES: usize = 8 * 4 * 33;
const TUBE_TRIANGLES: usize = 6 * 32;
const DOT_TRIANGLES: usize = 312;

fn full_cells(count: usize) -> Vec<BrailleCell> {
    (0..count)
        .map(|_| BrailleCell::new(DotVector::from_bits(0x3F), "め"))
        .collect()
}

#[test]
fn test_single_digit_plate() {
    let lines = vec![Line::new(map("1"))];
    let mesh = build_plate_mesh(&lines, &page_number_cells(1), 0.6).unwrap();
    // # (4 dots) + 1 (1 dot); no page number on a one-line plate
    assert_eq!(
        mesh.triangle_count(),
        BODY_TRIANGLES + TUBE_TRIANGLES + 5 * DOT_TRIANGLES
    );
    assert!(mesh.validate());
}

#[test]
fn test_page_number_only_on_multi_line_plates() {
    let lines = vec![Line::new(map("あ")), Line::new(map("い"))];
    let mesh = build_plate_mesh(&lines, &page_number_cells(1), 0.6).unwrap();
    // あ (1) + い (2) + page number # 1 (5)
    assert_eq!(
        mesh.triangle_count(),
        BODY_TRIANGLES + TUBE_TRIANGLES + 8 * DOT_TRIANGLES
    );
}

#[test]
fn test_empty_line_has_no_dots() {
    let lines = vec![Line::default()];
    let mesh = build_plate_mesh(&lines, &page_number_cells(3), 1.0).unwrap();
    assert_eq!(mesh.triangle_count(), BODY_TRIANGLES + TUBE_TRIANGLES);
}

#[test]
fn test_plate_bounds() {
    let lines: Vec<Line> = (0..4).map(|_| Line::new(full_cells(6))).collect();
    let mesh = build_plate_mesh(&lines, &page_number_cells(12), 0.8).unwrap();
    let dims = PlateDimensions::compute(4, 6, 3);
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.x, dims.width, epsilon = 1e-9);
    assert_relative_eq!(max.y, dims.height, epsilon = 1e-9);
    assert_relative_eq!(max.z, 0.8 + 0.75, epsilon = 1e-9);
}

#[test]
fn test_dimensions_grow_with_lines() {
    let dims = PlateDimensions::compute(3, 10, 2);
    assert_relative_eq!(dims.height, 4.0 + 10.0 + 2.0 * 12.0 + 4.0);
    assert_relative_eq!(dims.width, 4.0 + 15.0 + 60.0 + 4.0);
    assert_eq!(dims.hole_center, DVec2::new(8.0, dims.height - 8.0));
}

#[test]
fn test_left_column_widens_for_long_page_numbers() {
    // # 1 2 3
    let dims = PlateDimensions::compute(2, 1, 4);
    assert_relative_eq!(dims.left_column_width, 24.0);
    assert_relative_eq!(dims.page_number_origin(4).x, 4.0);
}

#[test]
fn test_page_number_is_centred_in_left_column() {
    let dims = PlateDimensions::compute(2, 1, 2);
    let origin = dims.page_number_origin(2);
    assert_relative_eq!(origin.x, 4.0 + 1.5);
    assert_relative_eq!(origin.y, 4.0 + 5.0 - 2.4, epsilon = 1e-12);
}

#[test]
fn test_first_line_origin() {
    let dims = PlateDimensions::compute(1, 1, 2);
    let origin = dims.line_origin(0);
    assert_relative_eq!(origin.x, 4.0 + 15.0);
    assert_relative_eq!(origin.y, dims.height - 4.0 - 5.0 - 2.4, epsilon = 1e-12);
    assert_relative_eq!(dims.line_origin(1).y, origin.y - 12.0, epsilon = 1e-12);
}

#[test]
fn test_plate_always_holds_the_hole() {
    let empty = PlateDimensions::compute(0, 0, 2);
    let single = PlateDimensions::compute(1, 0, 2);
    assert_eq!(empty, single);
    assert!(empty.height >= (2.5 + 1.5) * 2.0 + 4.0);
    assert!(empty.hole_center.y - 4.0 >= 4.0);
}

#[test]
fn test_invalid_thickness_is_rejected() {
    let lines = vec![Line::new(map("あ"))];
    assert!(matches!(
        build_plate_mesh(&lines, &page_number_cells(1), 0.0),
        Err(MeshError::DegenerateGeometry { .. })
    ));
    assert!(matches!(
        build_plate_mesh(&lines, &page_number_cells(1), f64::NAN),
        Err(MeshError::ValidationFailed { .. })
    ));
}

#[test]
fn test_build_is_deterministic() {
    let lines = vec![Line::new(map("きゃ")), Line::new(map("がっこう"))];
    let first = stl::serialize(&build_plate_mesh(&lines, &page_number_cells(2), 0.6).unwrap());
    let second = stl::serialize(&build_plate_mesh(&lines, &page_number_cells(2), 0.6).unwrap());
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn test_serialized_plate_length() {
    let lines = vec![Line::new(map("1"))];
    let mesh = build_plate_mesh(&lines, &page_number_cells(1), 0.6).unwrap();
    let bytes = stl::serialize(&mesh).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
    assert_eq!(stl::parse(&bytes).unwrap().triangle_count(), mesh.triangle_count());
}
