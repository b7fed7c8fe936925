//! Fixed slide geometry shared by every slide of a deck.

use crate::common::Length;

/// Widescreen canvas width, in inches.
pub const SLIDE_WIDTH_IN: f64 = 13.33;
/// Canvas height, in inches.
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

pub const TEXT_BOX_LEFT_IN: f64 = 1.0;
pub const TEXT_BOX_WIDTH_IN: f64 = 11.33;
pub const TEXT_BOX_HEIGHT_IN: f64 = 3.0;

/// Canvas size and text box footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub slide_width: Length,
    pub slide_height: Length,
    pub text_left: Length,
    pub text_top: Length,
    pub text_width: Length,
    pub text_height: Length,
}

impl Layout {
    /// The standard layout with the text box `offset_in` inches from the top.
    pub fn with_vertical_offset(offset_in: f64) -> Self {
        Self {
            slide_width: Length::from_inches(SLIDE_WIDTH_IN),
            slide_height: Length::from_inches(SLIDE_HEIGHT_IN),
            text_left: Length::from_inches(TEXT_BOX_LEFT_IN),
            text_top: Length::from_inches(offset_in),
            text_width: Length::from_inches(TEXT_BOX_WIDTH_IN),
            text_height: Length::from_inches(TEXT_BOX_HEIGHT_IN),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::with_vertical_offset(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widescreen_canvas() {
        let layout = Layout::with_vertical_offset(2.5);
        assert_eq!(layout.slide_height.emus(), 6_858_000);
        assert_eq!(layout.text_left.emus(), 914_400);
        assert_eq!(layout.text_top.emus(), 2_286_000);
        assert_eq!(layout.text_height.emus(), 2_743_200);
        // Text box spans the canvas minus one inch each side.
        assert_eq!(
            layout.text_left.emus() * 2 + layout.text_width.emus(),
            layout.slide_width.emus()
        );
    }
}
