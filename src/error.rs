/// Error types for presentation document operations.
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, PptxError>;

#[derive(Error, Debug)]
pub enum PptxError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::error::OpcError),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Part not found
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Operation not valid for the object's current content.
    ///
    /// Raised at the point of misuse, e.g. requesting the chart of a graphic
    /// frame that holds no chart. Guard with the matching predicate.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Capability deliberately out of scope.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for PptxError {
    fn from(err: quick_xml::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}
