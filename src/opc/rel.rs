//! Relationship objects for OPC packages.
//!
//! A relationship connects a source (the package or one of its parts) to a
//! target, identified by an rId unique within the source. Internal targets
//! are other parts; external targets are URLs.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use std::collections::HashMap;

/// A single relationship from a source to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
    /// Base URI of the source, for resolving relative targets
    base_uri: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    /// The relationship ID, e.g. "rId1".
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// The relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// The target reference: a relative partname for internal relationships,
    /// an absolute URL for external ones.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// The absolute partname of the target part.
    ///
    /// Fails for external relationships, which have no partname.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(
                "external relationship has no target partname".to_string(),
            ));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// The collection of relationships belonging to one source.
#[derive(Debug)]
pub struct Relationships {
    base_uri: String,
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create an empty collection for a source with the given base URI.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Add a relationship under an explicit rId.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) {
        let rel = Relationship::new(
            r_id.clone(),
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        );
        self.rels.insert(r_id, rel);
    }

    /// Look up a relationship by its rId.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get the existing relationship of `reltype` to `target_ref`, creating
    /// one under the next free rId when none exists.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        let existing = self
            .rels
            .values()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref && !rel.is_external())
            .map(|rel| rel.r_id().to_string());

        let r_id = match existing {
            Some(r_id) => r_id,
            None => {
                let r_id = self.next_r_id();
                self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id.clone(), false);
                r_id
            },
        };
        &self.rels[&r_id]
    }

    /// The next unused rId, filling gaps in the "rId1", "rId2", ... sequence.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .keys()
            .filter_map(|r_id| {
                r_id.strip_prefix("rId")
                    .and_then(|n| atoi_simd::parse::<u32, false, false>(n.as_bytes()).ok())
            })
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for n in used {
            match n.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }
        format!("rId{}", next)
    }

    /// The single relationship of the given type.
    ///
    /// Fails when no relationship of the type exists, or when more than one
    /// does.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.values().filter(|rel| rel.reltype() == reltype);
        let first = matching.next().ok_or_else(|| {
            OpcError::RelationshipNotFound(format!("no relationship of type '{}'", reltype))
        })?;
        if matching.next().is_some() {
            return Err(OpcError::InvalidRelationship(format!(
                "multiple relationships of type '{}'",
                reltype
            )));
        }
        Ok(first)
    }

    /// Iterate all relationships, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize this collection as a .rels XML document.
    ///
    /// Relationships are sorted by rId for deterministic output.
    pub fn to_xml(&self) -> String {
        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by_key(|rel| rel.r_id());

        let mut xml = String::with_capacity(256 + 128 * rels.len());
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');
        for rel in rels {
            xml.push_str("  <Relationship Id=\"");
            push_escaped(&mut xml, rel.r_id());
            xml.push_str("\" Type=\"");
            push_escaped(&mut xml, rel.reltype());
            xml.push_str("\" Target=\"");
            push_escaped(&mut xml, rel.target_ref());
            xml.push('"');
            if rel.is_external() {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>\n");
        }
        xml.push_str("</Relationships>");
        xml
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
