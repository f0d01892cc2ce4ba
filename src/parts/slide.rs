//! Slide, slide layout, and slide master parts.
//!
//! All three share the `p:cSld`/`p:spTree` content model; the wrappers here
//! differ only in the part they sit over and the relationships they follow.

use crate::error::{PptxError, Result};
use crate::opc::part::Part;
use crate::oxml::XmlElement;
use crate::shapes::base::ShapeKind;

/// A slide part, `/ppt/slides/slideN.xml`.
#[derive(Clone, Copy)]
pub struct SlidePart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// The slide name from `p:cSld`, empty when unnamed.
    pub fn name(&self) -> Result<String> {
        csld_name(self.part.blob())
    }

    /// The shape elements of this slide's shape tree, in document order.
    pub fn shape_elements(&self) -> Result<Vec<XmlElement>> {
        shape_elements(self.part.blob())
    }

    /// The underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// A slide layout part, `/ppt/slideLayouts/slideLayoutN.xml`.
#[derive(Clone, Copy)]
pub struct SlideLayoutPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// The layout name from `p:cSld`.
    pub fn name(&self) -> Result<String> {
        csld_name(self.part.blob())
    }

    /// The shape elements of this layout's shape tree, in document order.
    pub fn shape_elements(&self) -> Result<Vec<XmlElement>> {
        shape_elements(self.part.blob())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// A slide master part, `/ppt/slideMasters/slideMasterN.xml`.
#[derive(Clone, Copy)]
pub struct SlideMasterPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideMasterPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// The master name from `p:cSld`.
    pub fn name(&self) -> Result<String> {
        csld_name(self.part.blob())
    }

    /// The shape elements of this master's shape tree, in document order.
    pub fn shape_elements(&self) -> Result<Vec<XmlElement>> {
        shape_elements(self.part.blob())
    }

    /// The rIds of this master's slide layouts, from `p:sldLayoutIdLst`.
    pub fn slide_layout_rids(&self) -> Result<Vec<String>> {
        let root = XmlElement::parse(self.part.blob())?;
        let mut rids = Vec::new();
        if let Some(id_lst) = root.child("sldLayoutIdLst") {
            for id in id_lst.children_named("sldLayoutId") {
                if let Some(rid) = id.attr("r:id") {
                    rids.push(rid.to_string());
                }
            }
        }
        Ok(rids)
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// The `p:cSld/@name` of a slide-family part, empty when absent.
fn csld_name(blob: &[u8]) -> Result<String> {
    let root = XmlElement::parse(blob)?;
    Ok(root
        .child("cSld")
        .and_then(|c| c.attr("name"))
        .unwrap_or("")
        .to_string())
}

/// The recognized shape children of the part's `p:spTree`.
///
/// The shape tree is itself a group shape; its non-shape children (group
/// properties) are skipped.
fn shape_elements(blob: &[u8]) -> Result<Vec<XmlElement>> {
    let mut root = XmlElement::parse(blob)?;
    let sp_tree = root
        .descendant_mut(&["cSld", "spTree"])
        .ok_or_else(|| PptxError::InvalidFormat("part has no p:cSld/p:spTree".to_string()))?;

    Ok(sp_tree
        .take_children()
        .into_iter()
        .filter(|e| ShapeKind::from_tag(e.local_name()) != ShapeKind::Unknown)
        .collect())
}
