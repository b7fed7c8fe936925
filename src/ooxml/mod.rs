//! Office Open XML (OOXML) output.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package assembly (ZIP, parts, relationships,
//!    content types)
//! 2. **PresentationML** (`pptx`): slide, master, layout and theme parts for
//!    lyric decks
//!
//! # Example
//!
//! ```rust,no_run
//! use songdeck::deck::{self, DeckRequest, FontNames};
//! use songdeck::ooxml::pptx::PptxWriter;
//!
//! let request = DeckRequest::load("service.yaml")?;
//! let deck = deck::build(&request, &FontNames::default())?;
//! PptxWriter::new(&deck).save("service.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
