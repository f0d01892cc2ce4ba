//! Placeholder shapes and the inheritance machinery behind them.
//!
//! A placeholder on a slide inherits position and size it does not set
//! itself from the matching placeholder on the slide's layout, which in turn
//! inherits from the matching placeholder on the layout's master. Each
//! geometry field falls through the chain independently: a shape may store
//! its own left and top while taking width and height from two levels up.
//!
//! The chain is recomputed on every access. Nothing is cached, so edits to
//! any level are visible on the next read.

use crate::oxml::XmlElement;
use crate::shapes::base::BaseShape;
use crate::shapes::{Emu, GeomField};
use crate::slide::{Slide, SlideLayout};

/// Placeholder type, the `type` attribute of `p:ph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhType {
    Body,
    CenterTitle,
    Chart,
    ClipArt,
    Date,
    Diagram,
    Footer,
    Header,
    Media,
    Object,
    Picture,
    SlideImage,
    SlideNumber,
    Subtitle,
    Table,
    Title,
}

impl PhType {
    /// Parse an `ST_PlaceholderType` attribute value.
    pub fn from_str(value: &str) -> Option<Self> {
        Some(match value {
            "body" => PhType::Body,
            "ctrTitle" => PhType::CenterTitle,
            "chart" => PhType::Chart,
            "clipArt" => PhType::ClipArt,
            "dt" => PhType::Date,
            "dgm" => PhType::Diagram,
            "ftr" => PhType::Footer,
            "hdr" => PhType::Header,
            "media" => PhType::Media,
            "obj" => PhType::Object,
            "pic" => PhType::Picture,
            "sldImg" => PhType::SlideImage,
            "sldNum" => PhType::SlideNumber,
            "subTitle" => PhType::Subtitle,
            "tbl" => PhType::Table,
            "title" => PhType::Title,
            _ => return None,
        })
    }

    /// The attribute value for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            PhType::Body => "body",
            PhType::CenterTitle => "ctrTitle",
            PhType::Chart => "chart",
            PhType::ClipArt => "clipArt",
            PhType::Date => "dt",
            PhType::Diagram => "dgm",
            PhType::Footer => "ftr",
            PhType::Header => "hdr",
            PhType::Media => "media",
            PhType::Object => "obj",
            PhType::Picture => "pic",
            PhType::SlideImage => "sldImg",
            PhType::SlideNumber => "sldNum",
            PhType::Subtitle => "subTitle",
            PhType::Table => "tbl",
            PhType::Title => "title",
        }
    }

    /// The master-level type this type inherits from.
    ///
    /// Title variants collapse to title and the content-bearing types to
    /// body; date, footer, slide number, header, and slide image stand
    /// alone.
    pub fn base_type(self) -> PhType {
        match self {
            PhType::Title | PhType::CenterTitle => PhType::Title,
            PhType::Body
            | PhType::Chart
            | PhType::ClipArt
            | PhType::Diagram
            | PhType::Media
            | PhType::Object
            | PhType::Picture
            | PhType::Subtitle
            | PhType::Table => PhType::Body,
            other => other,
        }
    }

    /// Whether two types belong to the same inheritance family.
    pub fn is_compatible_with(self, other: PhType) -> bool {
        self.base_type() == other.base_type()
    }

    /// Whether this type marks a title placeholder.
    pub fn is_title(self) -> bool {
        self.base_type() == PhType::Title
    }
}

/// The placeholder designation of a shape: type plus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderFormat {
    pub ph_type: PhType,
    /// The `idx` attribute, 0 when absent
    pub idx: u32,
}

impl PlaceholderFormat {
    /// Read the designation from a `p:ph` element. A missing `type`
    /// attribute is `obj` and a missing `idx` is 0, the schema defaults.
    pub fn from_ph_element(ph: &XmlElement) -> Self {
        let ph_type = ph
            .attr("type")
            .and_then(PhType::from_str)
            .unwrap_or(PhType::Object);
        let idx = ph.uint_attr("idx").unwrap_or(0);
        Self { ph_type, idx }
    }
}

/// Index of the layout-level candidate a slide placeholder inherits from.
///
/// An explicit type match is preferred; failing that, a candidate whose type
/// is family-compatible. Within either rank, index equality breaks ties and
/// document order decides the rest. `None` is the normal no-parent outcome.
pub fn find_layout_parent(
    format: &PlaceholderFormat,
    candidates: &[PlaceholderFormat],
) -> Option<usize> {
    select(format, candidates, |c| c.ph_type == format.ph_type).or_else(|| {
        select(format, candidates, |c| {
            c.ph_type != format.ph_type && c.ph_type.is_compatible_with(format.ph_type)
        })
    })
}

fn select(
    format: &PlaceholderFormat,
    candidates: &[PlaceholderFormat],
    pred: impl Fn(&PlaceholderFormat) -> bool,
) -> Option<usize> {
    let mut first = None;
    for (i, candidate) in candidates.iter().enumerate() {
        if !pred(candidate) {
            continue;
        }
        if candidate.idx == format.idx {
            return Some(i);
        }
        if first.is_none() {
            first = Some(i);
        }
    }
    first
}

/// Index of the master-level candidate a layout placeholder inherits from:
/// the master placeholder carrying the layout type's base type.
pub fn find_master_parent(ph_type: PhType, candidates: &[PlaceholderFormat]) -> Option<usize> {
    let base = ph_type.base_type();
    candidates.iter().position(|c| c.ph_type == base)
}

/// A placeholder on a slide master. The top of the inheritance chain: unset
/// fields resolve to `None` with no further fallback.
#[derive(Debug, Clone)]
pub struct MasterPlaceholder {
    shape: BaseShape,
    format: PlaceholderFormat,
}

impl MasterPlaceholder {
    pub(crate) fn new(shape: BaseShape, format: PlaceholderFormat) -> Self {
        Self { shape, format }
    }

    pub fn ph_type(&self) -> PhType {
        self.format.ph_type
    }

    pub fn idx(&self) -> u32 {
        self.format.idx
    }

    pub fn name(&self) -> &str {
        self.shape.name()
    }

    pub fn left(&self) -> Option<Emu> {
        self.resolved(GeomField::Left)
    }

    pub fn top(&self) -> Option<Emu> {
        self.resolved(GeomField::Top)
    }

    pub fn width(&self) -> Option<Emu> {
        self.resolved(GeomField::Width)
    }

    pub fn height(&self) -> Option<Emu> {
        self.resolved(GeomField::Height)
    }

    pub(crate) fn resolved(&self, field: GeomField) -> Option<Emu> {
        self.shape.geometry(field)
    }

    pub fn shape(&self) -> &BaseShape {
        &self.shape
    }
}

/// A placeholder on a slide layout. Unset fields resolve through the
/// matching master placeholder.
#[derive(Clone)]
pub struct LayoutPlaceholder<'a> {
    shape: BaseShape,
    format: PlaceholderFormat,
    layout: SlideLayout<'a>,
}

impl<'a> LayoutPlaceholder<'a> {
    pub(crate) fn new(shape: BaseShape, format: PlaceholderFormat, layout: SlideLayout<'a>) -> Self {
        Self {
            shape,
            format,
            layout,
        }
    }

    pub fn ph_type(&self) -> PhType {
        self.format.ph_type
    }

    pub fn idx(&self) -> u32 {
        self.format.idx
    }

    pub fn name(&self) -> &str {
        self.shape.name()
    }

    /// The effective left offset, inherited from the master when not stored
    /// on this placeholder.
    pub fn left(&self) -> Option<Emu> {
        self.resolved(GeomField::Left)
    }

    pub fn top(&self) -> Option<Emu> {
        self.resolved(GeomField::Top)
    }

    pub fn width(&self) -> Option<Emu> {
        self.resolved(GeomField::Width)
    }

    pub fn height(&self) -> Option<Emu> {
        self.resolved(GeomField::Height)
    }

    pub(crate) fn resolved(&self, field: GeomField) -> Option<Emu> {
        match self.shape.geometry(field) {
            Some(value) => Some(value),
            None => self.parent()?.resolved(field),
        }
    }

    /// The master placeholder this one inherits from, `None` when the
    /// master defines no placeholder of the base type.
    pub fn parent(&self) -> Option<MasterPlaceholder> {
        let master = self.layout.master().ok()?;
        let candidates = master.placeholders().ok()?;
        let formats: Vec<PlaceholderFormat> =
            candidates.iter().map(|p| p.format).collect();
        let i = find_master_parent(self.format.ph_type, &formats)?;
        candidates.into_iter().nth(i)
    }

    pub fn shape(&self) -> &BaseShape {
        &self.shape
    }
}

/// A placeholder on a slide. Unset fields resolve through the matching
/// layout placeholder, and from there through the master.
#[derive(Clone)]
pub struct SlidePlaceholder<'a> {
    shape: BaseShape,
    format: PlaceholderFormat,
    slide: Slide<'a>,
}

impl<'a> SlidePlaceholder<'a> {
    pub(crate) fn new(shape: BaseShape, format: PlaceholderFormat, slide: Slide<'a>) -> Self {
        Self {
            shape,
            format,
            slide,
        }
    }

    pub fn ph_type(&self) -> PhType {
        self.format.ph_type
    }

    pub fn idx(&self) -> u32 {
        self.format.idx
    }

    pub fn name(&self) -> &str {
        self.shape.name()
    }

    /// The effective left offset after inheritance.
    pub fn left(&self) -> Option<Emu> {
        self.resolved(GeomField::Left)
    }

    pub fn top(&self) -> Option<Emu> {
        self.resolved(GeomField::Top)
    }

    pub fn width(&self) -> Option<Emu> {
        self.resolved(GeomField::Width)
    }

    pub fn height(&self) -> Option<Emu> {
        self.resolved(GeomField::Height)
    }

    /// Store a left offset on this shape. The stored value wins over the
    /// inherited one on every later read.
    pub fn set_left(&mut self, value: Emu) {
        self.shape.set_geometry(GeomField::Left, value);
    }

    pub fn set_top(&mut self, value: Emu) {
        self.shape.set_geometry(GeomField::Top, value);
    }

    pub fn set_width(&mut self, value: Emu) {
        self.shape.set_geometry(GeomField::Width, value);
    }

    pub fn set_height(&mut self, value: Emu) {
        self.shape.set_geometry(GeomField::Height, value);
    }

    fn resolved(&self, field: GeomField) -> Option<Emu> {
        match self.shape.geometry(field) {
            Some(value) => Some(value),
            None => self.parent()?.resolved(field),
        }
    }

    /// The layout placeholder this one inherits from, `None` when no layout
    /// placeholder matches by type or family.
    pub fn parent(&self) -> Option<LayoutPlaceholder<'a>> {
        let layout = self.slide.layout().ok()?;
        let candidates = layout.placeholders().ok()?;
        let formats: Vec<PlaceholderFormat> =
            candidates.iter().map(|p| p.format).collect();
        let i = find_layout_parent(&self.format, &formats)?;
        candidates.into_iter().nth(i)
    }

    pub fn shape(&self) -> &BaseShape {
        &self.shape
    }
}
