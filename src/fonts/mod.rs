//! Font metadata helpers.
//!
//! Uploaded font files are only ever inspected for their display name, which is
//! then written into run properties as a typeface. The font itself is never
//! embedded in the generated deck.

#[cfg(feature = "fonts")]
pub mod name;

#[cfg(feature = "fonts")]
pub use name::try_font_display_name;

/// Errors raised while reading a font's name table.
///
/// These never abort a build: [`font_display_name`] logs them and the style
/// resolver falls back to a default family.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font data: {0}")]
    InvalidData(String),
    #[error("Font has no name table")]
    MissingNameTable,
    #[error("Font has no full name entry")]
    MissingFullName,
    #[error("Font support is disabled. Enable it with --features fonts")]
    Disabled,
}

/// Return the display (full) name stored in a font file, if one can be read.
///
/// Never fails: malformed or unsupported data yields `None` so that callers can
/// fall back to a default family.
pub fn font_display_name(data: &[u8]) -> Option<String> {
    #[cfg(feature = "fonts")]
    let result = try_font_display_name(data);
    #[cfg(not(feature = "fonts"))]
    let result: Result<String, FontError> = {
        let _ = data;
        Err(FontError::Disabled)
    };

    match result {
        Ok(name) => {
            tracing::debug!(font = %name, "read font display name");
            Some(name)
        },
        Err(err) => {
            tracing::warn!(error = %err, bytes = data.len(), "font name extraction failed, using fallback");
            None
        },
    }
}
