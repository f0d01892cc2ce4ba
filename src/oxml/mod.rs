//! Owned XML element trees for part content.
//!
//! The OPC layer hands parts around as raw bytes; this module parses those
//! bytes into addressable trees with typed attribute access, which the part
//! proxies and shape objects read and mutate.

pub mod element;

pub use element::XmlElement;
