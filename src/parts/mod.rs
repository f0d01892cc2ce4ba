//! Format-specific wrappers over OPC parts.

pub mod chart;
pub mod presentation;
pub mod slide;

pub use chart::{ChartInfo, ChartKind, ChartPart};
pub use presentation::PresentationPart;
pub use slide::{SlideLayoutPart, SlideMasterPart, SlidePart};
