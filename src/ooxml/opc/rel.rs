//! Relationship part generation.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// An ordered set of relationships from one source part, with sequential
/// `rId1`, `rId2`, ... identifiers.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

#[derive(Debug, Clone)]
struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID.
    ///
    /// A relationship with the same type and target is reused rather than
    /// duplicated.
    pub fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let target = target.into();
        if let Some(existing) = self
            .rels
            .iter()
            .find(|r| r.reltype == reltype && r.target == target)
        {
            return existing.r_id.clone();
        }
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target,
        });
        r_id
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize as a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);
        for rel in &self.rels {
            xml.push_str(r#"<Relationship Id=""#);
            xml.push_str(&rel.r_id);
            xml.push_str(r#"" Type=""#);
            xml.push_str(rel.reltype);
            xml.push_str(r#"" Target=""#);
            xml.push_str(&escape_xml(&rel.target));
            xml.push_str(r#""/>"#);
        }
        xml.push_str("</Relationships>");
        xml
    }
}
