//! Chart parts, `/ppt/charts/chartN.xml`.

use crate::error::Result;
use crate::opc::part::Part;
use crate::oxml::XmlElement;

/// The plot kind of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    Bar,
    Bubble,
    Doughnut,
    Line,
    Pie,
    Radar,
    Scatter,
    Stock,
    Surface,
    /// Unrecognized plot element
    Unknown,
}

impl ChartKind {
    /// Classify a `c:plotArea` child element by its local name.
    fn from_plot_tag(local_name: &str) -> Option<Self> {
        Some(match local_name {
            "areaChart" | "area3DChart" => ChartKind::Area,
            "barChart" | "bar3DChart" => ChartKind::Bar,
            "bubbleChart" => ChartKind::Bubble,
            "doughnutChart" => ChartKind::Doughnut,
            "lineChart" | "line3DChart" => ChartKind::Line,
            "pieChart" | "pie3DChart" => ChartKind::Pie,
            "radarChart" => ChartKind::Radar,
            "scatterChart" => ChartKind::Scatter,
            "stockChart" => ChartKind::Stock,
            "surfaceChart" | "surface3DChart" => ChartKind::Surface,
            _ => return None,
        })
    }
}

/// Summary information read from a chart part.
#[derive(Debug, Clone)]
pub struct ChartInfo {
    pub chart_kind: ChartKind,
    pub title: Option<String>,
    pub has_legend: bool,
}

/// Wrapper over a chart part's XML.
#[derive(Clone, Copy)]
pub struct ChartPart<'a> {
    part: &'a dyn Part,
}

impl<'a> ChartPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Parse kind, title, and legend presence out of the chart space.
    pub fn chart_info(&self) -> Result<ChartInfo> {
        let root = XmlElement::parse(self.part.blob())?;
        let chart = root.child("chart");

        let chart_kind = chart
            .and_then(|c| c.child("plotArea"))
            .and_then(|plot| {
                plot.children()
                    .iter()
                    .find_map(|e| ChartKind::from_plot_tag(e.local_name()))
            })
            .unwrap_or(ChartKind::Unknown);

        let title = chart.and_then(|c| c.child("title")).and_then(|t| {
            let text = t.text_recursive();
            if text.is_empty() { None } else { Some(text) }
        });

        let has_legend = chart.is_some_and(|c| c.child("legend").is_some());

        Ok(ChartInfo {
            chart_kind,
            title,
            has_legend,
        })
    }

    /// The underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::packuri::PackURI;
    use crate::opc::part::XmlPart;

    fn chart_part(xml: &[u8]) -> XmlPart {
        XmlPart::new(
            PackURI::new("/ppt/charts/chart1.xml").unwrap(),
            "application/xml".to_string(),
            xml.to_vec(),
        )
    }

    #[test]
    fn classifies_bar_chart_with_title_and_legend() {
        let part = chart_part(
            br#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <c:chart>
    <c:title><c:tx><c:rich><a:p><a:r><a:t>Sales</a:t></a:r></a:p></c:rich></c:tx></c:title>
    <c:plotArea><c:layout/><c:barChart/></c:plotArea>
    <c:legend/>
  </c:chart>
</c:chartSpace>"#,
        );
        let info = ChartPart::from_part(&part).unwrap().chart_info().unwrap();
        assert_eq!(info.chart_kind, ChartKind::Bar);
        assert_eq!(info.title.as_deref(), Some("Sales"));
        assert!(info.has_legend);
    }

    #[test]
    fn unknown_plot_kind_and_no_legend() {
        let part = chart_part(
            br#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <c:chart><c:plotArea><c:layout/></c:plotArea></c:chart>
</c:chartSpace>"#,
        );
        let info = ChartPart::from_part(&part).unwrap().chart_info().unwrap();
        assert_eq!(info.chart_kind, ChartKind::Unknown);
        assert_eq!(info.title, None);
        assert!(!info.has_legend);
    }
}
