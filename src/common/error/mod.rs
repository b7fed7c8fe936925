//! Unified error types for songdeck.
//!
//! This module provides a single error type for request resolution, deck
//! assembly and package writing.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
