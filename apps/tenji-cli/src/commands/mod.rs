//! Command handlers.

pub mod export;
pub mod preview;
pub mod words;
