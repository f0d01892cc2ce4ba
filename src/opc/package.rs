//! The in-memory OPC package object graph.

use crate::opc::constants::relationship_type;
use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::{PACKAGE_URI, PackURI};
use crate::opc::part::{Part, PartFactory};
use crate::opc::phys_pkg::PhysPkgReader;
use crate::opc::pkgreader::PackageReader;
use crate::opc::pkgwriter::PackageWriter;
use crate::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

/// An Open Packaging Conventions package in memory: its parts, indexed by
/// partname, and the package-level relationships.
pub struct OpcPackage {
    rels: Relationships,
    parts: HashMap<String, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: HashMap::new(),
        }
    }

    /// Open a package file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::open(path)?)?)
    }

    /// Read a package from any seekable byte source.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::from_reader(reader)?)?)
    }

    /// Save this package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }

    /// Serialize this package to ZIP archive bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Convert serialized parts and relationships into the object graph.
    fn unmarshal(mut pkg_reader: PackageReader) -> Result<Self> {
        let mut package = Self::new();

        for srel in pkg_reader.pkg_srels() {
            package.rels.add_relationship(
                srel.reltype.clone(),
                srel.target_ref.clone(),
                srel.r_id.clone(),
                srel.is_external(),
            );
        }

        for spart in pkg_reader.take_sparts() {
            let mut part =
                PartFactory::load(spart.partname, spart.content_type, spart.blob)?;
            for srel in &spart.srels {
                part.rels_mut().add_relationship(
                    srel.reltype.clone(),
                    srel.target_ref.clone(),
                    srel.r_id.clone(),
                    srel.is_external(),
                );
            }
            package.parts.insert(part.partname().to_string(), part);
        }

        Ok(package)
    }

    /// The main document part: the one targeted by the package-level
    /// officeDocument relationship. For a presentation package this is
    /// `/ppt/presentation.xml`.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        self.get_part(&rel.target_partname()?)
    }

    /// Get a part by partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&(dyn Part + '_)> {
        match self.parts.get(partname.as_str()) {
            Some(b) => Ok(&**b),
            None => Err(OpcError::PartNotFound(partname.to_string())),
        }
    }

    /// Get mutable access to a part by partname.
    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut (dyn Part + '_)> {
        match self.parts.get_mut(partname.as_str()) {
            Some(b) => Ok(&mut **b),
            None => Err(OpcError::PartNotFound(partname.to_string())),
        }
    }

    /// Resolve an rId on a source part to the related part.
    ///
    /// This is the relationship-resolution read path used by content
    /// accessors such as a graphic frame's chart lookup.
    pub fn related_part(&self, source: &dyn Part, r_id: &str) -> Result<&dyn Part> {
        let rel = source
            .rels()
            .get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))?;
        self.get_part(&rel.target_partname()?)
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        self.parts.insert(part.partname().to_string(), part);
    }

    /// Whether a part exists for the partname.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname.as_str())
    }

    /// Iterate all parts in the package, in no particular order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b)
    }

    /// The number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// The package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Mutable access to the package-level relationships.
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
