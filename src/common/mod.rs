//! Common types and utilities shared across the crate.
//!
//! Colors, lengths, alignment, unit conversions, XML escaping and the unified
//! error type live here so the deck model and the writer agree on them.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Alignment, Length, RGBColor};
