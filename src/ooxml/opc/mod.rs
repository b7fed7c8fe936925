//! Open Packaging Conventions (OPC) support for writing packages.
//!
//! A package is a ZIP archive of parts, a `[Content_Types].xml` manifest and
//! `_rels/*.rels` relationship parts.

pub mod constants;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use pkgwriter::{PackageWriter, Part};
pub use rel::Relationships;
