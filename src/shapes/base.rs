//! Base shape properties common to every shape kind.

use crate::oxml::XmlElement;
use crate::shapes::placeholder::PlaceholderFormat;
use crate::shapes::{Emu, GeomField};

/// The element kind of a shape in a shape tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// An autoshape or text shape (`p:sp`)
    Shape,
    /// A picture (`p:pic`)
    Picture,
    /// A graphic frame containing a table, chart, or OLE object
    /// (`p:graphicFrame`)
    GraphicFrame,
    /// A group shape (`p:grpSp`)
    GroupShape,
    /// A connector (`p:cxnSp`)
    Connector,
    /// Unknown or unsupported shape element
    Unknown,
}

impl ShapeKind {
    /// Classify a shape-tree child element by its local name.
    pub fn from_tag(local_name: &str) -> Self {
        match local_name {
            "sp" => ShapeKind::Shape,
            "pic" => ShapeKind::Picture,
            "graphicFrame" => ShapeKind::GraphicFrame,
            "grpSp" => ShapeKind::GroupShape,
            "cxnSp" => ShapeKind::Connector,
            _ => ShapeKind::Unknown,
        }
    }
}

/// A shape parsed from a slide, layout, or master shape tree.
///
/// Geometry accessors read and write only this shape's own stored values.
/// Placeholder proxies layer inheritance on top; a plain shape with an unset
/// field has no fallback.
#[derive(Debug, Clone)]
pub struct BaseShape {
    element: XmlElement,
    kind: ShapeKind,
}

impl BaseShape {
    /// Wrap a shape-tree child element.
    pub fn new(element: XmlElement) -> Self {
        let kind = ShapeKind::from_tag(element.local_name());
        Self { element, kind }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The shape id from `p:cNvPr`, when present and numeric.
    pub fn shape_id(&self) -> Option<u32> {
        self.element.find("cNvPr")?.uint_attr("id")
    }

    /// The shape name from `p:cNvPr`, empty when absent.
    pub fn name(&self) -> &str {
        self.element
            .find("cNvPr")
            .and_then(|e| e.attr("name"))
            .unwrap_or("")
    }

    /// Whether this shape carries a `p:ph` placeholder designation.
    pub fn is_placeholder(&self) -> bool {
        self.ph_element().is_some()
    }

    /// The placeholder type and index, `None` for non-placeholder shapes.
    pub fn placeholder_format(&self) -> Option<PlaceholderFormat> {
        self.ph_element().map(PlaceholderFormat::from_ph_element)
    }

    fn ph_element(&self) -> Option<&XmlElement> {
        self.element.find("nvPr")?.child("ph")
    }

    /// The stored geometry value for one field, `None` when unset.
    pub fn geometry(&self, field: GeomField) -> Option<Emu> {
        let xfrm = self.xfrm()?;
        match field {
            GeomField::Left => xfrm.child("off")?.int_attr("x"),
            GeomField::Top => xfrm.child("off")?.int_attr("y"),
            GeomField::Width => xfrm.child("ext")?.int_attr("cx"),
            GeomField::Height => xfrm.child("ext")?.int_attr("cy"),
        }
    }

    /// Store a geometry value directly on this shape, creating the transform
    /// scaffolding when absent. A stored value wins over any inherited value
    /// on subsequent reads.
    pub fn set_geometry(&mut self, field: GeomField, value: Emu) {
        let xfrm = self.xfrm_mut();
        let (child_local, child_tag, attr) = match field {
            GeomField::Left => ("off", "a:off", "x"),
            GeomField::Top => ("off", "a:off", "y"),
            GeomField::Width => ("ext", "a:ext", "cx"),
            GeomField::Height => ("ext", "a:ext", "cy"),
        };
        xfrm.get_or_add_child(child_local, child_tag)
            .set_attr(attr, &value.to_string());
    }

    /// This shape's stored left offset, `None` when unset.
    pub fn left(&self) -> Option<Emu> {
        self.geometry(GeomField::Left)
    }

    pub fn top(&self) -> Option<Emu> {
        self.geometry(GeomField::Top)
    }

    pub fn width(&self) -> Option<Emu> {
        self.geometry(GeomField::Width)
    }

    pub fn height(&self) -> Option<Emu> {
        self.geometry(GeomField::Height)
    }

    pub fn set_left(&mut self, value: Emu) {
        self.set_geometry(GeomField::Left, value);
    }

    pub fn set_top(&mut self, value: Emu) {
        self.set_geometry(GeomField::Top, value);
    }

    pub fn set_width(&mut self, value: Emu) {
        self.set_geometry(GeomField::Width, value);
    }

    pub fn set_height(&mut self, value: Emu) {
        self.set_geometry(GeomField::Height, value);
    }

    /// The `a:xfrm` transform element holding this shape's geometry.
    ///
    /// A graphic frame stores its transform as a direct `p:xfrm` child; a
    /// group shape inside `p:grpSpPr`; every other kind inside `p:spPr`.
    fn xfrm(&self) -> Option<&XmlElement> {
        match self.kind {
            ShapeKind::GraphicFrame => self.element.child("xfrm"),
            ShapeKind::GroupShape => self.element.descendant(&["grpSpPr", "xfrm"]),
            _ => self.element.descendant(&["spPr", "xfrm"]),
        }
    }

    fn xfrm_mut(&mut self) -> &mut XmlElement {
        match self.kind {
            ShapeKind::GraphicFrame => self.element.get_or_add_child("xfrm", "p:xfrm"),
            ShapeKind::GroupShape => self
                .element
                .get_or_add_child("grpSpPr", "p:grpSpPr")
                .get_or_add_child("xfrm", "a:xfrm"),
            _ => self
                .element
                .get_or_add_child("spPr", "p:spPr")
                .get_or_add_child("xfrm", "a:xfrm"),
        }
    }

    /// Whether this shape can hold text.
    pub fn has_text_frame(&self) -> bool {
        self.kind == ShapeKind::Shape && self.element.child("txBody").is_some()
    }

    /// All text in this shape's text body, `None` when it has none.
    pub fn text(&self) -> Option<String> {
        let tx_body = self.element.child("txBody")?;
        let mut text = String::new();
        for paragraph in tx_body.children_named("p") {
            if !text.is_empty() {
                text.push('\n');
            }
            for t in collect_runs(paragraph) {
                text.push_str(t);
            }
        }
        Some(text)
    }

    /// The underlying element.
    #[inline]
    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    #[inline]
    pub fn element_mut(&mut self) -> &mut XmlElement {
        &mut self.element
    }
}

/// Text of each `a:t` under a paragraph, in document order.
fn collect_runs(paragraph: &XmlElement) -> Vec<&str> {
    let mut runs = Vec::new();
    for run in paragraph.children_named("r") {
        if let Some(t) = run.child("t") {
            runs.push(t.text());
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::placeholder::PhType;

    fn title_sp() -> BaseShape {
        let xml = br#"<p:sp>
            <p:nvSpPr>
                <p:cNvPr id="2" name="Title 1"/>
                <p:nvPr><p:ph type="title"/></p:nvPr>
            </p:nvSpPr>
            <p:spPr>
                <a:xfrm>
                    <a:off x="457200" y="274638"/>
                    <a:ext cx="8229600" cy="1143000"/>
                </a:xfrm>
            </p:spPr>
            <p:txBody>
                <a:p><a:r><a:t>Click to edit</a:t></a:r></a:p>
            </p:txBody>
        </p:sp>"#;
        BaseShape::new(XmlElement::parse(xml).unwrap())
    }

    #[test]
    fn identity_from_cnvpr() {
        let shape = title_sp();
        assert_eq!(shape.kind(), ShapeKind::Shape);
        assert_eq!(shape.shape_id(), Some(2));
        assert_eq!(shape.name(), "Title 1");
    }

    #[test]
    fn placeholder_format_reads_ph() {
        let shape = title_sp();
        assert!(shape.is_placeholder());
        let format = shape.placeholder_format().unwrap();
        assert_eq!(format.ph_type, PhType::Title);
        assert_eq!(format.idx, 0);
    }

    #[test]
    fn geometry_fields_are_independent() {
        let xml = br#"<p:sp><p:spPr><a:xfrm><a:off x="100" y="200"/></a:xfrm></p:spPr></p:sp>"#;
        let shape = BaseShape::new(XmlElement::parse(xml).unwrap());
        assert_eq!(shape.left(), Some(100));
        assert_eq!(shape.top(), Some(200));
        assert_eq!(shape.width(), None);
        assert_eq!(shape.height(), None);
    }

    #[test]
    fn no_xfrm_means_all_fields_unset() {
        let xml = br#"<p:sp><p:spPr/></p:sp>"#;
        let shape = BaseShape::new(XmlElement::parse(xml).unwrap());
        assert_eq!(shape.left(), None);
        assert_eq!(shape.height(), None);
    }

    #[test]
    fn setter_builds_missing_scaffolding() {
        let xml = br#"<p:sp><p:nvSpPr><p:cNvPr id="5" name="x"/></p:nvSpPr></p:sp>"#;
        let mut shape = BaseShape::new(XmlElement::parse(xml).unwrap());
        shape.set_left(914400);
        shape.set_width(457200);
        assert_eq!(shape.left(), Some(914400));
        assert_eq!(shape.width(), Some(457200));
        assert_eq!(shape.top(), None);
    }

    #[test]
    fn setter_overwrites_stored_value() {
        let mut shape = title_sp();
        assert_eq!(shape.left(), Some(457200));
        shape.set_left(914400);
        assert_eq!(shape.left(), Some(914400));
    }

    #[test]
    fn graphic_frame_xfrm_is_direct_child() {
        let xml = br#"<p:graphicFrame>
            <p:nvGraphicFramePr><p:cNvPr id="7" name="Table 6"/></p:nvGraphicFramePr>
            <p:xfrm><a:off x="1524000" y="1397000"/><a:ext cx="6096000" cy="741680"/></p:xfrm>
        </p:graphicFrame>"#;
        let shape = BaseShape::new(XmlElement::parse(xml).unwrap());
        assert_eq!(shape.kind(), ShapeKind::GraphicFrame);
        assert_eq!(shape.left(), Some(1524000));
        assert_eq!(shape.height(), Some(741680));
    }

    #[test]
    fn text_joins_paragraphs() {
        let shape = title_sp();
        assert!(shape.has_text_frame());
        assert_eq!(shape.text().unwrap(), "Click to edit");
    }
}
