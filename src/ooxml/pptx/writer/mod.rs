//! PPTX package writer for assembled decks.

mod media;
pub mod pres;
mod shape;
mod slide;

pub use pres::PptxWriter;
