//! Songdeck - builds widescreen lyric slide decks from songs
//!
//! A deck is assembled from a list of songs and a visual style: every song
//! gets a title slide followed by one slide per lyric line. Lines can carry a
//! translation on a second text run, and songs can be written as reusable
//! named blocks (verse, chorus, ...) played back in a given sequence with one
//! block highlighted.
//!
//! # Features
//!
//! - **Style resolution**: validates colors, sizes and the text offset, and
//!   fills in fallback fonts
//! - **Deck assembly**: pure, in-memory slide planning ([`deck::assemble`])
//! - **Font names**: reads the display name from TrueType/OpenType files
//!   (`fonts` feature)
//! - **PPTX output**: writes a PresentationML package (`ooxml` feature)
//!
//! # Example - Building a deck from a request document
//!
//! ```no_run
//! use songdeck::deck::{self, DeckRequest};
//! use songdeck::ooxml::pptx::PptxWriter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DeckRequest::load("sunday.yaml")?;
//! let fonts = request.read_font_names()?;
//! let deck = deck::build(&request, &fonts)?;
//!
//! PptxWriter::new(&deck).save("sunday.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Assembling slides directly
//!
//! ```
//! use songdeck::deck::{assemble, style, Background, FlatSong, Song, StyleInput};
//!
//! # fn main() -> songdeck::Result<()> {
//! let style = style::resolve(&StyleInput::default())?;
//! let song = Song::Flat(FlatSong {
//!     title_primary: "Grace".into(),
//!     lines_primary: vec!["A".into(), "B".into()],
//!     ..Default::default()
//! });
//! let slides = assemble(
//!     &[song],
//!     &style,
//!     &Background::Solid(style.title_background),
//!     &Background::Solid(style.lyric_background),
//! );
//! assert_eq!(slides.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod fonts;

#[cfg(feature = "ooxml")]
pub mod ooxml;

pub use common::{Error, Result};
pub use deck::{Deck, DeckRequest, build};
