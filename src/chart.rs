//! The chart object reached through a graphic frame.

use crate::error::Result;
use crate::parts::chart::{ChartInfo, ChartKind, ChartPart};

/// A chart contained in a graphic frame.
///
/// Obtained from [`crate::shapes::GraphicFrame::chart`]; summary properties
/// are parsed from the related chart part.
pub struct Chart<'a> {
    part: ChartPart<'a>,
    info: ChartInfo,
}

impl<'a> Chart<'a> {
    pub(crate) fn new(part: ChartPart<'a>) -> Result<Self> {
        let info = part.chart_info()?;
        Ok(Self { part, info })
    }

    /// The plot kind, e.g. bar or pie.
    pub fn chart_kind(&self) -> ChartKind {
        self.info.chart_kind
    }

    /// The chart title text, `None` when untitled.
    pub fn title(&self) -> Option<&str> {
        self.info.title.as_deref()
    }

    /// Whether the chart displays a legend.
    pub fn has_legend(&self) -> bool {
        self.info.has_legend
    }

    /// The underlying chart part.
    #[inline]
    pub fn part(&self) -> &ChartPart<'a> {
        &self.part
    }
}
