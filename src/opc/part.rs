//! Package parts, the fundamental units of content in an OPC package.
//!
//! Each part has a unique partname (a [`PackURI`]), a content type, a binary
//! blob, and a collection of relationships to other parts.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;
use memchr::memmem;

/// A part in an OPC package.
pub trait Part {
    /// The partname of this part.
    fn partname(&self) -> &PackURI;

    /// The content type of this part.
    fn content_type(&self) -> &str;

    /// The binary content of this part.
    fn blob(&self) -> &[u8];

    /// Replace the binary content of this part.
    fn set_blob(&mut self, blob: Vec<u8>);

    /// The relationships from this part to other parts.
    fn rels(&self) -> &Relationships;

    /// Mutable access to this part's relationships.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Get or create a relationship to another part, returning its rId.
    fn relate_to(&mut self, target_partname: &str, reltype: &str) -> String {
        self.rels_mut()
            .get_or_add(reltype, target_partname)
            .r_id()
            .to_string()
    }

    /// The target reference recorded for an rId on this part.
    fn target_ref(&self, r_id: &str) -> Result<&str> {
        self.rels()
            .get(r_id)
            .map(|rel| rel.target_ref())
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))
    }

    /// Count `r:id="<rId>"` references to a relationship within this part's
    /// content. Zero for binary parts, which carry no XML references.
    fn rel_ref_count(&self, r_id: &str) -> usize {
        let pattern = format!(r#"r:id="{}""#, r_id);
        memmem::find_iter(self.blob(), pattern.as_bytes()).count()
    }
}

/// A part holding opaque binary content, e.g. an embedded image.
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// A part holding an XML document.
///
/// The content is validated to be UTF-8 on load; higher layers parse it into
/// element trees on demand.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml_bytes: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    pub fn new(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            xml_bytes,
            rels,
        }
    }

    /// Load an XML part, rejecting content that is not valid UTF-8.
    pub fn load(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Result<Self> {
        std::str::from_utf8(&xml_bytes)
            .map_err(|e| OpcError::XmlError(format!("invalid UTF-8 in XML part: {}", e)))?;
        Ok(Self::new(partname, content_type, xml_bytes))
    }

    /// The XML content as a string slice.
    pub fn xml_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.xml_bytes).map_err(Into::into)
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.xml_bytes
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.xml_bytes = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Creates the appropriate Part implementation for a content type.
pub struct PartFactory;

impl PartFactory {
    /// Load a part, choosing [`XmlPart`] for XML content types and
    /// [`BlobPart`] otherwise.
    pub fn load(partname: PackURI, content_type: String, blob: Vec<u8>) -> Result<Box<dyn Part>> {
        if Self::is_xml_content_type(&content_type) {
            Ok(Box::new(XmlPart::load(partname, content_type, blob)?))
        } else {
            Ok(Box::new(BlobPart::new(partname, content_type, blob)))
        }
    }

    #[inline]
    fn is_xml_content_type(content_type: &str) -> bool {
        content_type.ends_with("+xml") || content_type.ends_with("/xml")
    }
}
