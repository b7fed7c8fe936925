//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! third-party error types to the unified Error type.

use super::types::Error;

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Request(err.to_string())
    }
}
