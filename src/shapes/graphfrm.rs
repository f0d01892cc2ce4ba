//! The graphic-frame shape, a container for table, chart, and OLE content.
//!
//! Content accessors follow a strict check-then-access convention: call the
//! `has_*` predicate (or catch the invalid-operation error) before asking
//! for the content object.

use crate::chart::Chart;
use crate::error::{PptxError, Result};
use crate::opc::constants::graphic_data_uri;
use crate::oxml::XmlElement;
use crate::parts::chart::ChartPart;
use crate::shapes::base::BaseShape;
use crate::shapes::table::Table;
use crate::shapes::{Emu, GeomField};
use crate::slide::Slide;

/// The recognized content categories of a graphic frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicKind {
    Chart,
    Table,
}

/// Shadow formatting surface; not constructible, see
/// [`GraphicFrame::shadow`].
#[derive(Debug)]
pub struct ShadowFormat(pub(crate) ());

/// Attributes of an embedded OLE object.
#[derive(Debug, Clone)]
pub struct OleFormat {
    /// The ProgID, e.g. "Excel.Sheet.12"
    pub prog_id: Option<String>,
    /// rId of the embedded object part
    pub object_rid: Option<String>,
    /// Whether the object displays as an icon rather than a preview
    pub show_as_icon: bool,
}

/// A `p:graphicFrame` shape on a slide.
pub struct GraphicFrame<'a> {
    shape: BaseShape,
    slide: Slide<'a>,
}

impl<'a> GraphicFrame<'a> {
    pub(crate) fn new(shape: BaseShape, slide: Slide<'a>) -> Self {
        Self { shape, slide }
    }

    pub fn name(&self) -> &str {
        self.shape.name()
    }

    pub fn shape_id(&self) -> Option<u32> {
        self.shape.shape_id()
    }

    /// The frame's stored left offset. Graphic frames are not placeholders;
    /// an unset field has no inherited fallback.
    pub fn left(&self) -> Option<Emu> {
        self.shape.geometry(GeomField::Left)
    }

    pub fn top(&self) -> Option<Emu> {
        self.shape.geometry(GeomField::Top)
    }

    pub fn width(&self) -> Option<Emu> {
        self.shape.geometry(GeomField::Width)
    }

    pub fn height(&self) -> Option<Emu> {
        self.shape.geometry(GeomField::Height)
    }

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

    /// Whether this frame contains a chart. When true, [`Self::chart`]
    /// succeeds.
    pub fn has_chart(&self) -> bool {
        frame_has_chart(&self.shape)
    }

    /// Whether this frame contains a table. When true, [`Self::table`]
    /// succeeds.
    pub fn has_table(&self) -> bool {
        frame_has_table(&self.shape)
    }

    /// Whether this frame contains an embedded or linked OLE object.
    pub fn has_ole_object(&self) -> bool {
        frame_has_ole_object(&self.shape)
    }

    /// The content category of this frame, chart taking priority over
    /// table. `None` for unrecognized content such as SmartArt.
    pub fn shape_kind(&self) -> Option<GraphicKind> {
        if self.has_chart() {
            Some(GraphicKind::Chart)
        } else if self.has_table() {
            Some(GraphicKind::Table)
        } else {
            None
        }
    }

    /// The chart in this frame, resolved through the slide part's
    /// relationships.
    ///
    /// Fails with an invalid-operation error when the frame contains no
    /// chart.
    pub fn chart(&self) -> Result<Chart<'a>> {
        if !self.has_chart() {
            return Err(PptxError::InvalidOperation(
                "shape does not contain a chart".to_string(),
            ));
        }
        let r_id = chart_rid(&self.shape).ok_or_else(|| {
            PptxError::InvalidFormat("chart reference carries no r:id".to_string())
        })?;
        let part = self.slide.related_part(r_id)?;
        Chart::new(ChartPart::from_part(part)?)
    }

    /// The table in this frame.
    ///
    /// Fails with an invalid-operation error when the frame contains no
    /// table.
    pub fn table(&self) -> Result<Table> {
        if !self.has_table() {
            return Err(PptxError::InvalidOperation(
                "shape does not contain a table".to_string(),
            ));
        }
        let tbl = graphic_data(&self.shape)
            .and_then(|gd| gd.child("tbl"))
            .ok_or_else(|| PptxError::InvalidFormat("graphicData has no a:tbl".to_string()))?;
        Ok(Table::new(tbl.clone()))
    }

    /// The OLE-object attributes of this frame.
    ///
    /// Fails with an invalid-operation error when the frame contains no OLE
    /// object.
    pub fn ole_format(&self) -> Result<OleFormat> {
        if !self.has_ole_object() {
            return Err(PptxError::InvalidOperation(
                "not an OLE-object shape".to_string(),
            ));
        }
        let ole_obj = self.shape.element().find("oleObj");
        Ok(OleFormat {
            prog_id: ole_obj.and_then(|o| o.attr("progId")).map(str::to_string),
            object_rid: ole_obj.and_then(|o| o.attr("r:id")).map(str::to_string),
            show_as_icon: ole_obj
                .and_then(|o| o.attr("showAsIcon"))
                .is_some_and(|v| v == "1" || v == "true"),
        })
    }

    /// Always fails with a not-implemented error.
    ///
    /// Shadow formatting for graphic frames is content-specific (charts and
    /// tables differ) and has not been designed.
    pub fn shadow(&self) -> Result<ShadowFormat> {
        Err(PptxError::NotImplemented(
            "shadow on a graphic frame is content-specific and not supported".to_string(),
        ))
    }

    /// The underlying shape.
    pub fn base_shape(&self) -> &BaseShape {
        &self.shape
    }
}

/// The frame's `a:graphicData` element.
fn graphic_data(shape: &BaseShape) -> Option<&XmlElement> {
    shape.element().descendant(&["graphic", "graphicData"])
}

fn graphic_data_has_uri(shape: &BaseShape, uri: &str) -> bool {
    graphic_data(shape).and_then(|gd| gd.attr("uri")) == Some(uri)
}

fn frame_has_chart(shape: &BaseShape) -> bool {
    graphic_data_has_uri(shape, graphic_data_uri::CHART)
}

fn frame_has_table(shape: &BaseShape) -> bool {
    graphic_data_has_uri(shape, graphic_data_uri::TABLE)
        || graphic_data(shape).is_some_and(|gd| gd.child("tbl").is_some())
}

fn frame_has_ole_object(shape: &BaseShape) -> bool {
    graphic_data_has_uri(shape, graphic_data_uri::OLE_OBJECT)
}

fn chart_rid(shape: &BaseShape) -> Option<&str> {
    graphic_data(shape)?.child("chart")?.attr("r:id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxml::XmlElement;

    fn frame_shape(graphic_data: &str) -> BaseShape {
        let xml = format!(
            r#"<p:graphicFrame>
                <p:nvGraphicFramePr><p:cNvPr id="5" name="Frame 4"/></p:nvGraphicFramePr>
                <p:xfrm><a:off x="1524000" y="1397000"/><a:ext cx="6096000" cy="4064000"/></p:xfrm>
                <a:graphic>{}</a:graphic>
            </p:graphicFrame>"#,
            graphic_data
        );
        BaseShape::new(XmlElement::parse(xml.as_bytes()).unwrap())
    }

    #[test]
    fn table_frame_predicates() {
        let shape = frame_shape(
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl/></a:graphicData>"#,
        );
        assert!(frame_has_table(&shape));
        assert!(!frame_has_chart(&shape));
        assert!(!frame_has_ole_object(&shape));
    }

    #[test]
    fn chart_frame_predicates_and_rid() {
        let shape = frame_shape(
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart"><c:chart r:id="rId2"/></a:graphicData>"#,
        );
        assert!(frame_has_chart(&shape));
        assert!(!frame_has_table(&shape));
        assert_eq!(chart_rid(&shape), Some("rId2"));
    }

    #[test]
    fn ole_frame_predicate() {
        let shape = frame_shape(
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/presentationml/2006/ole"><p:oleObj progId="Excel.Sheet.12" r:id="rId3" showAsIcon="1"/></a:graphicData>"#,
        );
        assert!(frame_has_ole_object(&shape));
        assert!(!frame_has_chart(&shape));
        assert!(!frame_has_table(&shape));
    }

    #[test]
    fn smartart_frame_matches_nothing() {
        let shape = frame_shape(
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/diagram"><dgm:relIds/></a:graphicData>"#,
        );
        assert!(!frame_has_chart(&shape));
        assert!(!frame_has_table(&shape));
        assert!(!frame_has_ole_object(&shape));
    }
}
