//! PowerPoint (.pptx) output.
//!
//! [`PptxWriter`] turns an assembled [`crate::deck::Deck`] into a widescreen
//! presentation package.

pub mod format;
pub mod template;
pub mod writer;

pub use format::ImageFormat;
pub use writer::PptxWriter;
