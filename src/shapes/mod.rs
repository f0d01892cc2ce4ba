//! Shape objects for slides, layouts, and masters.
//!
//! Shapes are owned snapshots parsed out of their containing part's shape
//! tree. Placeholder shapes resolve unset geometry through the
//! slide → layout → master inheritance chain; see [`placeholder`].

pub mod base;
pub mod graphfrm;
pub mod placeholder;
pub mod table;

pub use base::{BaseShape, ShapeKind};
pub use graphfrm::{GraphicFrame, GraphicKind, OleFormat, ShadowFormat};
pub use placeholder::{
    LayoutPlaceholder, MasterPlaceholder, PhType, PlaceholderFormat, SlidePlaceholder,
};
pub use table::Table;

/// English Metric Units, the integer length unit of all shape geometry.
/// 914400 EMU to the inch.
pub type Emu = i64;

/// One of the four independently-stored geometry fields of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomField {
    Left,
    Top,
    Width,
    Height,
}
