//! Physical package writer: the ZIP container of an OPC package.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ooxml::error::Result;

/// Physical package writer for creating OPC packages.
///
/// Writes members to an in-memory ZIP archive. XML parts are deflated;
/// already-compressed media can be stored as-is.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a member with Deflate compression.
    ///
    /// `membername` is the ZIP member name, without a leading slash.
    pub fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.write_with(membername, blob, CompressionMethod::Deflated)
    }

    /// Write a member without compression (stored).
    pub fn write_stored(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.write_with(membername, blob, CompressionMethod::Stored)
    }

    fn write_with(&mut self, membername: &str, blob: &[u8], method: CompressionMethod) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(method);
        self.archive.start_file(membername, options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
