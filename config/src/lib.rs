//! # Config Crate
//!
//! Centralized constants and layout settings for the tenji-fab pipeline.
//! Every physical dimension of an embossed plate, every tessellation count
//! and every layout default is defined here so that the cell, layout, mesh
//! and package crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CHAR_PITCH, DOT_PITCH_X, DOT_BASE_DIAMETER};
//! use config::LayoutSettings;
//!
//! // Two dot columns plus one dot diameter must fit inside a character pitch
//! assert!(DOT_PITCH_X + DOT_BASE_DIAMETER < CHAR_PITCH);
//!
//! let settings = LayoutSettings::default();
//! assert!(settings.validate().is_ok());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters**: Every length is in millimeters, matching slicer defaults
//! - **Validated Settings**: `LayoutSettings` is rejected before any work starts

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, LayoutSettings};

#[cfg(test)]
mod tests;
