//! Style resolution.
//!
//! Raw style settings (hex color strings, point sizes, optional font names and
//! the vertical text offset) are validated once and turned into a canonical
//! [`Style`] shared by every slide of a deck.

use serde::Deserialize;

use crate::common::{Error, RGBColor, Result};

/// Fallback family for the primary (local-script) track.
pub const FALLBACK_FONT_PRIMARY: &str = "Malgun Gothic";
/// Fallback family for the secondary (Latin-script) track.
pub const FALLBACK_FONT_SECONDARY: &str = "Arial";

/// Color used for lines of the highlighted block.
pub const HIGHLIGHT_COLOR: RGBColor = RGBColor::new(255, 192, 0);

/// Font sizes PowerPoint accepts, in points (`ST_TextFontSize` is 100..=400000).
pub const MIN_FONT_SIZE: f64 = 1.0;
pub const MAX_FONT_SIZE: f64 = 4000.0;

/// Allowed range for the text box top, in inches.
pub const MAX_VERTICAL_OFFSET: f64 = 6.0;

/// Unvalidated style settings as collected from the request.
///
/// Deserializes from the `style` section of a request document; every field
/// is optional there and defaults to the values of [`StyleInput::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleInput {
    pub title_color_primary: String,
    pub title_color_secondary: String,
    pub title_background: String,
    pub lyric_color_primary: String,
    pub lyric_color_secondary: String,
    pub lyric_background: String,

    pub title_size_primary: f64,
    pub title_size_secondary: f64,
    pub lyric_size_primary: f64,
    pub lyric_size_secondary: f64,

    pub title_font_primary: Option<String>,
    pub title_font_secondary: Option<String>,
    pub lyric_font_primary: Option<String>,
    pub lyric_font_secondary: Option<String>,

    /// Distance of the text box from the slide top, in inches.
    pub text_vertical_offset: f64,
}

impl Default for StyleInput {
    fn default() -> Self {
        Self {
            title_color_primary: "#000000".into(),
            title_color_secondary: "#666666".into(),
            title_background: "#FFFFFF".into(),
            lyric_color_primary: "#FFFFFF".into(),
            lyric_color_secondary: "#FFFF00".into(),
            lyric_background: "#000000".into(),
            title_size_primary: 50.0,
            title_size_secondary: 36.0,
            lyric_size_primary: 50.0,
            lyric_size_secondary: 28.0,
            title_font_primary: None,
            title_font_secondary: None,
            lyric_font_primary: None,
            lyric_font_secondary: None,
            text_vertical_offset: 1.0,
        }
    }
}

/// Canonical, validated style for one deck build.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub title_font_primary: String,
    pub title_font_secondary: String,
    pub lyric_font_primary: String,
    pub lyric_font_secondary: String,

    pub title_size_primary: f64,
    pub title_size_secondary: f64,
    pub lyric_size_primary: f64,
    pub lyric_size_secondary: f64,

    pub title_color_primary: RGBColor,
    pub title_color_secondary: RGBColor,
    pub lyric_color_primary: RGBColor,
    pub lyric_color_secondary: RGBColor,
    pub title_background: RGBColor,
    pub lyric_background: RGBColor,

    pub text_vertical_offset: f64,
}

/// Validate raw settings and produce a canonical [`Style`].
///
/// # Errors
///
/// - [`Error::InvalidColor`] if a color is not six hex digits.
/// - [`Error::InvalidStyle`] if a size is outside `1.0..=4000.0` points or the
///   offset is outside `0.0..=6.0`.
pub fn resolve(input: &StyleInput) -> Result<Style> {
    let style = Style {
        title_font_primary: font_or(&input.title_font_primary, FALLBACK_FONT_PRIMARY),
        title_font_secondary: font_or(&input.title_font_secondary, FALLBACK_FONT_SECONDARY),
        lyric_font_primary: font_or(&input.lyric_font_primary, FALLBACK_FONT_PRIMARY),
        lyric_font_secondary: font_or(&input.lyric_font_secondary, FALLBACK_FONT_SECONDARY),

        title_size_primary: size("title_size_primary", input.title_size_primary)?,
        title_size_secondary: size("title_size_secondary", input.title_size_secondary)?,
        lyric_size_primary: size("lyric_size_primary", input.lyric_size_primary)?,
        lyric_size_secondary: size("lyric_size_secondary", input.lyric_size_secondary)?,

        title_color_primary: color("title_color_primary", &input.title_color_primary)?,
        title_color_secondary: color("title_color_secondary", &input.title_color_secondary)?,
        lyric_color_primary: color("lyric_color_primary", &input.lyric_color_primary)?,
        lyric_color_secondary: color("lyric_color_secondary", &input.lyric_color_secondary)?,
        title_background: color("title_background", &input.title_background)?,
        lyric_background: color("lyric_background", &input.lyric_background)?,

        text_vertical_offset: offset(input.text_vertical_offset)?,
    };
    Ok(style)
}

/// Surrounding whitespace is tolerated here; [`RGBColor::from_hex`] itself is strict.
fn color(field: &'static str, value: &str) -> Result<RGBColor> {
    RGBColor::from_hex(value.trim()).ok_or_else(|| Error::InvalidColor {
        field,
        value: value.to_string(),
    })
}

fn size(field: &'static str, value: f64) -> Result<f64> {
    if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidStyle {
            field,
            reason: format!(
                "font size must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE} points, got {value}"
            ),
        })
    }
}

fn offset(value: f64) -> Result<f64> {
    if (0.0..=MAX_VERTICAL_OFFSET).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidStyle {
            field: "text_vertical_offset",
            reason: format!("must be between 0.0 and {MAX_VERTICAL_OFFSET} inches, got {value}"),
        })
    }
}

fn font_or(name: &Option<String>, fallback: &str) -> String {
    name.as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
