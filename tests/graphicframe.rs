//! Graphic-frame content accessors over a complete package.

mod common;

use slidedom::parts::chart::ChartKind;
use slidedom::{GraphicKind, Package, PptxError};
use std::io::Cursor;

fn open_fixture() -> Package {
    Package::from_reader(Cursor::new(common::inherit_fixture())).unwrap()
}

#[test]
fn table_frame_exposes_table() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let slide = &slides[1];

    let frames = slide.graphic_frames().unwrap();
    let frame = frames.iter().find(|f| f.name() == "Table 1").unwrap();

    assert!(frame.has_table());
    assert!(!frame.has_chart());
    assert_eq!(frame.shape_kind(), Some(GraphicKind::Table));

    let table = frame.table().unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.cell_text(0, 0).unwrap(), "Region");
    assert_eq!(table.cell_text(1, 1).unwrap(), "42");
}

#[test]
fn table_frame_rejects_chart_access() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();
    let frame = frames.iter().find(|f| f.name() == "Table 1").unwrap();

    assert!(matches!(
        frame.chart(),
        Err(PptxError::InvalidOperation(_))
    ));
    assert!(matches!(
        frame.ole_format(),
        Err(PptxError::InvalidOperation(_))
    ));
}

#[test]
fn chart_frame_resolves_chart_part_through_relationship() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();
    let frame = frames.iter().find(|f| f.name() == "Chart 2").unwrap();

    assert!(frame.has_chart());
    assert!(!frame.has_table());
    assert_eq!(frame.shape_kind(), Some(GraphicKind::Chart));

    let chart = frame.chart().unwrap();
    assert_eq!(chart.chart_kind(), ChartKind::Bar);
    assert_eq!(chart.title(), Some("Quarterly Revenue"));
    assert!(chart.has_legend());

    assert!(matches!(
        frame.table(),
        Err(PptxError::InvalidOperation(_))
    ));
}

#[test]
fn chart_wins_classification_over_table() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();
    let frame = frames
        .iter()
        .find(|f| f.name() == "Chart with stray table")
        .unwrap();

    // Both predicates hold for this malformed frame; the chart check has
    // priority.
    assert!(frame.has_chart());
    assert!(frame.has_table());
    assert_eq!(frame.shape_kind(), Some(GraphicKind::Chart));
}

#[test]
fn ole_frame_exposes_ole_format() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();
    let frame = frames.iter().find(|f| f.name() == "Worksheet 4").unwrap();

    assert!(frame.has_ole_object());
    assert_eq!(frame.shape_kind(), None);

    let ole = frame.ole_format().unwrap();
    assert_eq!(ole.prog_id.as_deref(), Some("Excel.Sheet.12"));
    assert!(ole.show_as_icon);
}

#[test]
fn smartart_frame_matches_no_category() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();
    let frame = frames.iter().find(|f| f.name() == "Diagram 5").unwrap();

    assert!(!frame.has_chart());
    assert!(!frame.has_table());
    assert!(!frame.has_ole_object());
    assert_eq!(frame.shape_kind(), None);
}

#[test]
fn shadow_always_fails_not_implemented() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let frames = slides[1].graphic_frames().unwrap();

    for frame in &frames {
        assert!(matches!(
            frame.shadow(),
            Err(PptxError::NotImplemented(_))
        ));
    }
}

#[test]
fn frame_geometry_reads_and_writes_directly() {
    let pkg = open_fixture();
    let pres = pkg.presentation().unwrap();
    let slides = pres.slides().unwrap();
    let mut frames = slides[1].graphic_frames().unwrap();
    let frame = frames.iter_mut().find(|f| f.name() == "Table 1").unwrap();

    assert_eq!(frame.left(), Some(1524000));
    assert_eq!(frame.height(), Some(741680));

    frame.set_top(500000);
    assert_eq!(frame.top(), Some(500000));
}
