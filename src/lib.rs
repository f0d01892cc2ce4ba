//! slidedom - A document object model for PowerPoint presentations
//!
//! This library reads, manipulates, and writes .pptx packages: ZIP
//! containers of XML parts connected by relationships, per the Open
//! Packaging Conventions. Its core is placeholder inheritance: a
//! placeholder shape on a slide resolves position and size it does not set
//! itself through the matching placeholder on its layout and, from there,
//! on the layout's master, independently per field.
//!
//! # Example - Reading placeholder geometry
//!
//! ```no_run
//! use slidedom::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("deck.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     for placeholder in slide.placeholders()? {
//!         // Inherited values fall through layout and master.
//!         println!(
//!             "{:?} idx={} left={:?} width={:?}",
//!             placeholder.ph_type(),
//!             placeholder.idx(),
//!             placeholder.left(),
//!             placeholder.width(),
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Graphic-frame content
//!
//! ```no_run
//! use slidedom::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("deck.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     for frame in slide.graphic_frames()? {
//!         if frame.has_chart() {
//!             let chart = frame.chart()?;
//!             println!("chart: {:?} {:?}", chart.chart_kind(), chart.title());
//!         } else if frame.has_table() {
//!             let table = frame.table()?;
//!             println!("table: {}x{}", table.row_count(), table.column_count());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod error;
pub mod opc;
pub mod oxml;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;

pub use chart::Chart;
pub use error::{PptxError, Result};
pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{
    BaseShape, Emu, GeomField, GraphicFrame, GraphicKind, LayoutPlaceholder, MasterPlaceholder,
    PhType, PlaceholderFormat, ShapeKind, SlidePlaceholder, Table,
};
pub use slide::{Slide, SlideLayout, SlideMaster};
