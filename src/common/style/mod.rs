//! Common style and formatting types.
//!
//! This module provides the color, length and alignment types used by the
//! deck model and the presentation writer.

// Submodule declarations
pub mod color;
pub mod len;
pub mod text;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
pub use text::Alignment;
