//! Unified error types for songdeck.
//!
//! Configuration errors (colors, sizes, offsets, song shapes) are all raised while
//! the request is resolved, before any slide is built. Package-writing errors come
//! from the OOXML writer and are folded in through [`Error::Ooxml`].
use thiserror::Error;

/// Main error type for songdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A color field is not six hexadecimal digits
    #[error("Invalid color for {field}: {value:?} (expected 6 hex digits such as \"#FFAA00\")")]
    InvalidColor { field: &'static str, value: String },

    /// A size or offset is outside its allowed range
    #[error("Invalid style value for {field}: {reason}")]
    InvalidStyle { field: &'static str, reason: String },

    /// A song in the request has an unusable shape
    #[error("Invalid song #{index} ({title:?}): {reason}")]
    InvalidSong {
        index: usize,
        title: String,
        reason: String,
    },

    /// The request document could not be deserialized
    #[error("Request error: {0}")]
    Request(String),

    /// A file named by the request could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    File {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while writing the presentation package
    #[cfg(feature = "ooxml")]
    #[error("OOXML error: {0}")]
    Ooxml(#[from] crate::ooxml::OoxmlError),
}

impl Error {
    /// Whether this error was caused by user-supplied configuration rather than I/O.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidColor { .. }
                | Error::InvalidStyle { .. }
                | Error::InvalidSong { .. }
                | Error::Request(_)
        )
    }
}

/// Result type for songdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
