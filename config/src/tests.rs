//! # Tests for Layout Settings
//!
//! Unit tests verifying validation and deserialization of `LayoutSettings`.

use crate::constants::*;
use crate::{ConfigError, LayoutSettings};

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_settings_are_valid() {
    let settings = LayoutSettings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.max_chars_per_line, DEFAULT_MAX_CHARS_PER_LINE);
    assert_eq!(settings.max_lines_per_plate, DEFAULT_MAX_LINES_PER_PLATE);
    assert_eq!(settings.plate_thickness_mm, DEFAULT_PLATE_THICKNESS_MM);
}

#[test]
fn test_default_settings_are_not_unusual() {
    assert!(LayoutSettings::default().unusual_fields().is_empty());
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_new_rejects_zero_chars() {
    assert_eq!(
        LayoutSettings::new(0, 4, 0.6).unwrap_err(),
        ConfigError::InvalidCharsPerLine(0)
    );
}

#[test]
fn test_new_rejects_zero_lines() {
    assert_eq!(
        LayoutSettings::new(10, 0, 0.6).unwrap_err(),
        ConfigError::InvalidLinesPerPlate(0)
    );
}

#[test]
fn test_new_rejects_non_positive_thickness() {
    assert_eq!(
        LayoutSettings::new(10, 4, 0.0).unwrap_err(),
        ConfigError::InvalidThickness(0.0)
    );
    assert_eq!(
        LayoutSettings::new(10, 4, -1.0).unwrap_err(),
        ConfigError::InvalidThickness(-1.0)
    );
    assert!(LayoutSettings::new(10, 4, f64::INFINITY).is_err());
}

#[test]
fn test_validate_catches_mutated_fields() {
    let mut settings = LayoutSettings::default();
    settings.max_lines_per_plate = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_out_of_range_values_are_not_clamped() {
    let settings = LayoutSettings::new(1, 50, 3.0).unwrap();
    assert_eq!(settings.max_chars_per_line, 1);
    assert_eq!(settings.max_lines_per_plate, 50);
    assert_eq!(
        settings.unusual_fields(),
        vec!["max_chars_per_line", "max_lines_per_plate", "plate_thickness_mm"]
    );
}

// =============================================================================
// SERDE TESTS
// =============================================================================

#[test]
fn test_deserialize_partial_settings() {
    let settings: LayoutSettings =
        serde_json::from_str(r#"{ "plate_thickness_mm": 1.2 }"#).unwrap();
    assert_eq!(settings.plate_thickness_mm, 1.2);
    assert_eq!(settings.max_chars_per_line, DEFAULT_MAX_CHARS_PER_LINE);
}

#[test]
fn test_deserialized_settings_still_need_validation() {
    let settings: LayoutSettings =
        serde_json::from_str(r#"{ "max_chars_per_line": 0 }"#).unwrap();
    assert!(settings.validate().is_err());
}
