//! The presentation package, entry point for opening and saving .pptx files.

use crate::error::{PptxError, Result};
use crate::opc::OpcPackage;
use crate::opc::constants::content_type as ct;
use crate::parts::PresentationPart;
use crate::presentation::Presentation;
use std::io::{Read, Seek};
use std::path::Path;

/// A PowerPoint (.pptx) package.
///
/// Wraps an OPC package and verifies on open that the main part is a
/// presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use slidedom::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
/// for slide in pres.slides()? {
///     println!("slide: {}", slide.name()?);
/// }
/// # Ok::<(), slidedom::PptxError>(())
/// ```
pub struct Package {
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path).map_err(PptxError::Opc)?)
    }

    /// Open a .pptx package from a seekable byte source.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader).map_err(PptxError::Opc)?)
    }

    /// Verify the main part's content type and wrap the OPC package.
    /// Regular and macro-enabled presentations are both accepted.
    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| PptxError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(PptxError::InvalidContentType {
                expected: format!("{} or {}", ct::PML_PRESENTATION_MAIN, ct::PML_PRES_MACRO_MAIN),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// The main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| PptxError::PartNotFound(format!("main presentation part: {}", e)))?;
        Ok(Presentation::new(
            PresentationPart::from_part(main_part)?,
            &self.opc,
        ))
    }

    /// Save this package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.opc.save(path).map_err(PptxError::Opc)
    }

    /// Serialize this package to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.opc.to_bytes().map_err(PptxError::Opc)
    }

    /// The underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }

    /// Mutable access to the underlying OPC package.
    #[inline]
    pub fn opc_package_mut(&mut self) -> &mut OpcPackage {
        &mut self.opc
    }
}
