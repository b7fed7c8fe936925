//! Slide specifications handed to the presentation writer.

use std::path::{Path, PathBuf};

use crate::common::{Alignment, RGBColor};

/// Whether a slide introduces a song or carries one lyric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Content,
}

/// Slide background: a solid fill or a full-slide picture, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(RGBColor),
    /// Path to a PNG/JPEG/... image owned by the caller.
    Image(PathBuf),
}

impl Background {
    /// Pick the image when one is supplied, otherwise the solid color.
    pub fn image_or_solid(image: Option<&Path>, color: RGBColor) -> Self {
        match image {
            Some(path) => Background::Image(path.to_path_buf()),
            None => Background::Solid(color),
        }
    }

    pub fn image_path(&self) -> Option<&Path> {
        match self {
            Background::Image(path) => Some(path),
            Background::Solid(_) => None,
        }
    }
}

/// One line of styled text on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: String,
    pub size_pt: f64,
    pub color: RGBColor,
    pub alignment: Alignment,
}

impl TextRun {
    /// A centered run.
    pub fn centered(text: impl Into<String>, font: &str, size_pt: f64, color: RGBColor) -> Self {
        Self {
            text: text.into(),
            font: font.to_string(),
            size_pt,
            color,
            alignment: Alignment::Center,
        }
    }
}

/// Everything needed to render one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    pub kind: SlideKind,
    pub background: Background,
    /// One or two stacked runs: primary text, then optional secondary text.
    pub runs: Vec<TextRun>,
}

impl SlideSpec {
    pub fn primary(&self) -> Option<&TextRun> {
        self.runs.first()
    }

    pub fn secondary(&self) -> Option<&TextRun> {
        self.runs.get(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_takes_precedence() {
        let bg = Background::image_or_solid(Some(Path::new("title.jpg")), RGBColor::WHITE);
        assert_eq!(bg, Background::Image(PathBuf::from("title.jpg")));
        assert_eq!(bg.image_path(), Some(Path::new("title.jpg")));

        let bg = Background::image_or_solid(None, RGBColor::WHITE);
        assert_eq!(bg, Background::Solid(RGBColor::WHITE));
        assert_eq!(bg.image_path(), None);
    }
}
