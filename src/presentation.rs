//! The presentation object, entry point to slides, layouts, and masters.

use crate::error::{PptxError, Result};
use crate::opc::part::Part;
use crate::opc::{OpcPackage, PackURI};
use crate::parts::{PresentationPart, SlideMasterPart, SlidePart};
use crate::slide::{Slide, SlideLayout, SlideMaster};

/// The main presentation. Obtained from
/// [`crate::package::Package::presentation`].
pub struct Presentation<'a> {
    part: PresentationPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// All slides, in presentation order.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let mut slides = Vec::new();
        for rid in self.part.slide_rids()? {
            let part = self.related_part(&rid)?;
            slides.push(Slide::new(SlidePart::from_part(part)?, self.package));
        }
        Ok(slides)
    }

    /// The slide at `index`, `None` when out of range.
    pub fn slide(&self, index: usize) -> Result<Option<Slide<'a>>> {
        Ok(self.slides()?.into_iter().nth(index))
    }

    /// The number of slides.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.part.slide_rids()?.len())
    }

    /// All slide masters.
    pub fn slide_masters(&self) -> Result<Vec<SlideMaster<'a>>> {
        let mut masters = Vec::new();
        for rid in self.part.slide_master_rids()? {
            let part = self.related_part(&rid)?;
            masters.push(SlideMaster::new(SlideMasterPart::from_part(part)?, self.package));
        }
        Ok(masters)
    }

    /// All slide layouts, grouped by master in master order.
    pub fn slide_layouts(&self) -> Result<Vec<SlideLayout<'a>>> {
        let mut layouts = Vec::new();
        for master in self.slide_masters()? {
            layouts.extend(master.layouts()?);
        }
        Ok(layouts)
    }

    /// The slide width in EMU, `None` when the presentation declares no
    /// slide size.
    pub fn slide_width(&self) -> Result<Option<i64>> {
        self.part.slide_width()
    }

    /// The slide height in EMU.
    pub fn slide_height(&self) -> Result<Option<i64>> {
        self.part.slide_height()
    }

    fn related_part(&self, r_id: &str) -> Result<&'a dyn Part> {
        let pres_part = self.part.part();
        let target_ref = pres_part.target_ref(r_id).map_err(PptxError::Opc)?;
        let partname = PackURI::from_rel_ref(pres_part.partname().base_uri(), target_ref)
            .map_err(crate::opc::error::OpcError::InvalidPackUri)
            .map_err(PptxError::Opc)?;
        self.package.get_part(&partname).map_err(PptxError::Opc)
    }

    /// The underlying presentation part.
    #[inline]
    pub fn part(&self) -> &PresentationPart<'a> {
        &self.part
    }

    /// The underlying OPC package.
    #[inline]
    pub fn package(&self) -> &'a OpcPackage {
        self.package
    }
}
