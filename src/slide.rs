//! Slide, slide layout, and slide master objects.
//!
//! These are thin façades over their parts, wired to the package so that
//! related parts (a slide's layout, a layout's master, a frame's chart) can
//! be reached through relationships.

use crate::error::{PptxError, Result};
use crate::opc::OpcPackage;
use crate::opc::constants::relationship_type;
use crate::opc::part::Part;
use crate::parts::{SlideLayoutPart, SlideMasterPart, SlidePart};
use crate::shapes::base::{BaseShape, ShapeKind};
use crate::shapes::graphfrm::GraphicFrame;
use crate::shapes::placeholder::{LayoutPlaceholder, MasterPlaceholder, SlidePlaceholder};

/// A slide in a presentation.
#[derive(Clone, Copy)]
pub struct Slide<'a> {
    part: SlidePart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Slide<'a> {
    pub(crate) fn new(part: SlidePart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// The slide name, empty when unnamed.
    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// All shapes on this slide, in document order.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        Ok(self
            .part
            .shape_elements()?
            .into_iter()
            .map(BaseShape::new)
            .collect())
    }

    /// The placeholder shapes on this slide, in document order.
    ///
    /// Slide placeholders resolve unset geometry through this slide's layout
    /// and its master.
    pub fn placeholders(&self) -> Result<Vec<SlidePlaceholder<'a>>> {
        let mut placeholders = Vec::new();
        for element in self.part.shape_elements()? {
            let shape = BaseShape::new(element);
            if let Some(format) = shape.placeholder_format() {
                placeholders.push(SlidePlaceholder::new(shape, format, *self));
            }
        }
        Ok(placeholders)
    }

    /// The title (or center-title) placeholder, `None` when the slide has
    /// none.
    pub fn title_placeholder(&self) -> Result<Option<SlidePlaceholder<'a>>> {
        Ok(self
            .placeholders()?
            .into_iter()
            .find(|p| p.ph_type().is_title()))
    }

    /// The placeholder with the given index, `None` when no placeholder
    /// carries it.
    pub fn placeholder_by_idx(&self, idx: u32) -> Result<Option<SlidePlaceholder<'a>>> {
        Ok(self.placeholders()?.into_iter().find(|p| p.idx() == idx))
    }

    /// The graphic-frame shapes on this slide: tables, charts, and embedded
    /// objects.
    pub fn graphic_frames(&self) -> Result<Vec<GraphicFrame<'a>>> {
        let mut frames = Vec::new();
        for element in self.part.shape_elements()? {
            let shape = BaseShape::new(element);
            if shape.kind() == ShapeKind::GraphicFrame {
                frames.push(GraphicFrame::new(shape, *self));
            }
        }
        Ok(frames)
    }

    /// The slide layout this slide is based on.
    pub fn layout(&self) -> Result<SlideLayout<'a>> {
        let rel = self
            .part
            .part()
            .rels()
            .part_with_reltype(relationship_type::SLIDE_LAYOUT)
            .map_err(PptxError::Opc)?;
        let partname = rel.target_partname().map_err(PptxError::Opc)?;
        let part = self.package.get_part(&partname).map_err(PptxError::Opc)?;
        Ok(SlideLayout::new(SlideLayoutPart::from_part(part)?, self.package))
    }

    /// Resolve an rId on this slide's part to the related part.
    pub(crate) fn related_part(&self, r_id: &str) -> Result<&'a dyn Part> {
        self.package
            .related_part(self.part.part(), r_id)
            .map_err(PptxError::Opc)
    }

    /// The underlying slide part.
    #[inline]
    pub fn part(&self) -> &SlidePart<'a> {
        &self.part
    }
}

/// A slide layout, the middle level of the placeholder inheritance chain.
#[derive(Clone, Copy)]
pub struct SlideLayout<'a> {
    part: SlideLayoutPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> SlideLayout<'a> {
    pub(crate) fn new(part: SlideLayoutPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// The layout name, e.g. "Title Slide".
    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// All shapes on this layout, in document order.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        Ok(self
            .part
            .shape_elements()?
            .into_iter()
            .map(BaseShape::new)
            .collect())
    }

    /// The placeholder shapes on this layout, in document order.
    pub fn placeholders(&self) -> Result<Vec<LayoutPlaceholder<'a>>> {
        let mut placeholders = Vec::new();
        for element in self.part.shape_elements()? {
            let shape = BaseShape::new(element);
            if let Some(format) = shape.placeholder_format() {
                placeholders.push(LayoutPlaceholder::new(shape, format, *self));
            }
        }
        Ok(placeholders)
    }

    /// The placeholder with the given index, `None` when no placeholder
    /// carries it.
    pub fn placeholder_by_idx(&self, idx: u32) -> Result<Option<LayoutPlaceholder<'a>>> {
        Ok(self.placeholders()?.into_iter().find(|p| p.idx() == idx))
    }

    /// The slide master this layout is based on.
    pub fn master(&self) -> Result<SlideMaster<'a>> {
        let rel = self
            .part
            .part()
            .rels()
            .part_with_reltype(relationship_type::SLIDE_MASTER)
            .map_err(PptxError::Opc)?;
        let partname = rel.target_partname().map_err(PptxError::Opc)?;
        let part = self.package.get_part(&partname).map_err(PptxError::Opc)?;
        Ok(SlideMaster::new(SlideMasterPart::from_part(part)?, self.package))
    }

    /// The underlying layout part.
    #[inline]
    pub fn part(&self) -> &SlideLayoutPart<'a> {
        &self.part
    }
}

/// A slide master, the top level of the placeholder inheritance chain.
#[derive(Clone, Copy)]
pub struct SlideMaster<'a> {
    part: SlideMasterPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> SlideMaster<'a> {
    pub(crate) fn new(part: SlideMasterPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// The master name, empty when unnamed.
    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// All shapes on this master, in document order.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        Ok(self
            .part
            .shape_elements()?
            .into_iter()
            .map(BaseShape::new)
            .collect())
    }

    /// The placeholder shapes on this master, in document order.
    pub fn placeholders(&self) -> Result<Vec<MasterPlaceholder>> {
        let mut placeholders = Vec::new();
        for element in self.part.shape_elements()? {
            let shape = BaseShape::new(element);
            if let Some(format) = shape.placeholder_format() {
                placeholders.push(MasterPlaceholder::new(shape, format));
            }
        }
        Ok(placeholders)
    }

    /// The slide layouts based on this master.
    pub fn layouts(&self) -> Result<Vec<SlideLayout<'a>>> {
        let mut layouts = Vec::new();
        for rid in self.part.slide_layout_rids()? {
            let target_ref = self.part.part().target_ref(&rid).map_err(PptxError::Opc)?;
            let base_uri = self.part.part().partname().base_uri();
            let partname = crate::opc::PackURI::from_rel_ref(base_uri, target_ref)
                .map_err(crate::opc::error::OpcError::InvalidPackUri)
                .map_err(PptxError::Opc)?;
            let part = self.package.get_part(&partname).map_err(PptxError::Opc)?;
            layouts.push(SlideLayout::new(SlideLayoutPart::from_part(part)?, self.package));
        }
        Ok(layouts)
    }

    /// The underlying master part.
    #[inline]
    pub fn part(&self) -> &SlideMasterPart<'a> {
        &self.part
    }
}
