//! Text properties shared by slide text runs.

pub mod align;

pub use align::Alignment;
