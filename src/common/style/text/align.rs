//! Paragraph alignment shared by every text run on a slide.

/// Horizontal paragraph alignment.
///
/// Slides produced by the deck assembler are always centered; the other
/// variants exist so the writer maps every DrawingML value it can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// The `algn` attribute value used in `a:pPr`.
    #[inline]
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}
