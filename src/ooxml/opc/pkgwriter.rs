//! Package writer: assembles parts, relationships and the content-type
//! manifest into a complete OPC package.

use std::collections::BTreeMap;
use std::path::Path;

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use crate::ooxml::opc::rel::Relationships;

/// A part to be written, addressed by its partname (e.g. `/ppt/slides/slide1.xml`).
#[derive(Debug, Clone)]
pub struct Part {
    pub partname: String,
    pub content_type: String,
    pub blob: Vec<u8>,
    pub rels: Relationships,
}

impl Part {
    pub fn new(
        partname: impl Into<String>,
        content_type: impl Into<String>,
        blob: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            partname: partname.into(),
            content_type: content_type.into(),
            blob: blob.into(),
            rels: Relationships::new(),
        }
    }

    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    /// ZIP member name: the partname without its leading slash.
    fn membername(&self) -> &str {
        self.partname.trim_start_matches('/')
    }

    /// Member name of this part's relationships, e.g. `ppt/slides/_rels/slide1.xml.rels`.
    fn rels_membername(&self) -> String {
        let member = self.membername();
        match member.rsplit_once('/') {
            Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
            None => format!("_rels/{member}.rels"),
        }
    }

    fn ext(&self) -> &str {
        self.partname.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }

    fn is_media(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Writes a set of parts plus package-level relationships as a ZIP package.
#[derive(Debug, Default)]
pub struct PackageWriter {
    rels: Relationships,
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Package-level relationships (`_rels/.rels`).
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let cti = ContentTypesItem::from_parts(&self.parts);
        phys_writer.write("[Content_Types].xml", cti.to_xml().as_bytes())?;
        phys_writer.write("_rels/.rels", self.rels.to_xml().as_bytes())?;

        for part in &self.parts {
            if part.is_media() {
                phys_writer.write_stored(part.membername(), &part.blob)?;
            } else {
                phys_writer.write(part.membername(), &part.blob)?;
            }
            if !part.rels.is_empty() {
                phys_writer.write(&part.rels_membername(), part.rels.to_xml().as_bytes())?;
            }
        }

        phys_writer.finish()
    }

    /// Write the package to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            if part.is_media() {
                cti.defaults
                    .insert(part.ext().to_string(), part.content_type.clone());
            } else {
                cti.overrides
                    .insert(part.partname.clone(), part.content_type.clone());
            }
        }
        cti
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
