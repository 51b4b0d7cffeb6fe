//! Layout settings supplied by the caller for one export.
//!
//! Settings are validated before any conversion work begins; the core never
//! clamps an out-of-range value.

use crate::constants::{
    DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PLATE, DEFAULT_PLATE_THICKNESS_MM,
    RECOMMENDED_CHARS_PER_LINE, RECOMMENDED_LINES_PER_PLATE, RECOMMENDED_PLATE_THICKNESS_MM,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable layout limits for one export.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// settings file only needs to name the values it changes.
///
/// # Examples
/// ```
/// use config::LayoutSettings;
///
/// let settings: LayoutSettings = serde_json::from_str(r#"{ "max_chars_per_line": 12 }"#).unwrap();
/// assert_eq!(settings.max_chars_per_line, 12);
/// assert_eq!(settings.max_lines_per_plate, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Maximum number of cells on one line.
    pub max_chars_per_line: usize,
    /// Maximum number of lines on one plate.
    pub max_lines_per_plate: usize,
    /// Thickness of the plate body in millimeters.
    pub plate_thickness_mm: f64,
}

impl LayoutSettings {
    /// Builds settings, rejecting zero limits and non-positive thickness.
    ///
    /// # Examples
    /// ```
    /// use config::LayoutSettings;
    ///
    /// let settings = LayoutSettings::new(8, 2, 1.0).expect("valid settings");
    /// assert_eq!(settings.max_chars_per_line, 8);
    /// assert!(LayoutSettings::new(0, 2, 1.0).is_err());
    /// ```
    pub fn new(
        max_chars_per_line: usize,
        max_lines_per_plate: usize,
        plate_thickness_mm: f64,
    ) -> Result<Self, ConfigError> {
        let settings = Self {
            max_chars_per_line,
            max_lines_per_plate,
            plate_thickness_mm,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field is positive.
    ///
    /// Needed for settings obtained by deserialization or by mutating fields,
    /// which bypass [`LayoutSettings::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars_per_line == 0 {
            return Err(ConfigError::InvalidCharsPerLine(self.max_chars_per_line));
        }
        if self.max_lines_per_plate == 0 {
            return Err(ConfigError::InvalidLinesPerPlate(self.max_lines_per_plate));
        }
        validate_thickness(self.plate_thickness_mm)
    }

    /// Lists the fields that lie outside the recommended ranges.
    ///
    /// Such values are legal; callers may surface them as warnings.
    ///
    /// # Examples
    /// ```
    /// use config::LayoutSettings;
    ///
    /// let settings = LayoutSettings::new(40, 4, 0.6).unwrap();
    /// assert_eq!(settings.unusual_fields(), vec!["max_chars_per_line"]);
    /// ```
    pub fn unusual_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let (lo, hi) = RECOMMENDED_CHARS_PER_LINE;
        if !(lo..=hi).contains(&self.max_chars_per_line) {
            fields.push("max_chars_per_line");
        }
        let (lo, hi) = RECOMMENDED_LINES_PER_PLATE;
        if !(lo..=hi).contains(&self.max_lines_per_plate) {
            fields.push("max_lines_per_plate");
        }
        let (lo, hi) = RECOMMENDED_PLATE_THICKNESS_MM;
        if !(lo..=hi).contains(&self.plate_thickness_mm) {
            fields.push("plate_thickness_mm");
        }
        fields
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_lines_per_plate: DEFAULT_MAX_LINES_PER_PLATE,
            plate_thickness_mm: DEFAULT_PLATE_THICKNESS_MM,
        }
    }
}

/// Rejects a plate thickness that is zero, negative, NaN or infinite.
///
/// # Examples
/// ```
/// use config::settings::validate_thickness;
///
/// assert!(validate_thickness(0.6).is_ok());
/// assert!(validate_thickness(0.0).is_err());
/// assert!(validate_thickness(f64::NAN).is_err());
/// ```
pub fn validate_thickness(thickness_mm: f64) -> Result<(), ConfigError> {
    if thickness_mm.is_finite() && thickness_mm > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThickness(thickness_mm))
    }
}

/// Error returned when invalid layout values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the per-line cell limit is zero.
    #[error("max_chars_per_line must be >= 1: {0}")]
    InvalidCharsPerLine(usize),
    /// Raised when the per-plate line limit is zero.
    #[error("max_lines_per_plate must be >= 1: {0}")]
    InvalidLinesPerPlate(usize),
    /// Raised when the plate thickness is not a positive finite number.
    #[error("plate_thickness_mm must be positive: {0}")]
    InvalidThickness(f64),
}
