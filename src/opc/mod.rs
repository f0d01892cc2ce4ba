//! Open Packaging Conventions (OPC) layer.
//!
//! A presentation file is a ZIP archive of parts connected by relationships,
//! with content types declared in [Content_Types].xml. This module reads
//! that structure into an in-memory object graph and serializes it back out:
//!
//! - [`packuri`]: the partname value type
//! - [`part`]: parts and the part factory
//! - [`rel`]: relationship collections
//! - [`phys_pkg`], [`pkgreader`], [`pkgwriter`]: physical archive IO
//! - [`package`]: the assembled [`OpcPackage`]

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part, XmlPart};
pub use rel::{Relationship, Relationships};
