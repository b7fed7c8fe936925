//! Lyric deck model and assembly.
//!
//! The pipeline is: [`DeckRequest`] → [`style::resolve`] → [`assemble`] →
//! [`Deck`]. Everything here is pure and in-memory; reading font files and
//! writing the package happen at the edges ([`DeckRequest::read_font_names`]
//! and [`crate::ooxml::pptx::PptxWriter`]).
//!
//! # Example
//!
//! ```rust
//! use songdeck::deck::{self, DeckRequest, FontNames, SlideKind};
//!
//! # fn main() -> songdeck::Result<()> {
//! let request = DeckRequest::from_yaml_str(
//!     "songs:\n  - title: Grace\n    lyrics: \"A\\nB\"\n    translation: \"a\"\n",
//! )?;
//! let deck = deck::build(&request, &FontNames::default())?;
//!
//! assert_eq!(deck.slides.len(), 3);
//! assert_eq!(deck.slides[0].kind, SlideKind::Title);
//! assert_eq!(deck.slides[1].runs.len(), 2);
//! assert_eq!(deck.slides[2].runs.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod layout;
pub mod request;
pub mod slide;
pub mod song;
pub mod style;

pub use assemble::{assemble, content_slide, title_slide};
pub use layout::Layout;
pub use request::{DeckRequest, FontNames, ResolvedRequest, SongEntry};
pub use slide::{Background, SlideKind, SlideSpec, TextRun};
pub use song::{BlockSong, ContentLine, FlatSong, Song};
pub use style::{HIGHLIGHT_COLOR, Style, StyleInput};

use crate::common::Result;

/// An assembled deck: slides in presentation order plus the shared geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub slides: Vec<SlideSpec>,
    pub layout: Layout,
}

impl Deck {
    /// Assemble a deck from already-validated parts.
    pub fn from_resolved(resolved: &ResolvedRequest) -> Self {
        let slides = assemble(
            &resolved.songs,
            &resolved.style,
            &resolved.title_background,
            &resolved.lyric_background,
        );
        Self {
            slides,
            layout: Layout::with_vertical_offset(resolved.style.text_vertical_offset),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Validate `request` and assemble its deck.
///
/// All configuration errors surface here, before any slide exists.
pub fn build(request: &DeckRequest, fonts: &FontNames) -> Result<Deck> {
    let resolved = request.resolve(fonts)?;
    let deck = Deck::from_resolved(&resolved);
    tracing::info!(
        songs = resolved.songs.len(),
        slides = deck.slide_count(),
        "deck assembled"
    );
    Ok(deck)
}
