//! Table content of a graphic frame.

use crate::oxml::XmlElement;

/// A DrawingML table (`a:tbl`), as contained in a graphic frame.
#[derive(Debug, Clone)]
pub struct Table {
    tbl: XmlElement,
}

impl Table {
    pub(crate) fn new(tbl: XmlElement) -> Self {
        Self { tbl }
    }

    /// The number of rows.
    pub fn row_count(&self) -> usize {
        self.tbl.children_named("tr").count()
    }

    /// The number of columns, from the table grid.
    pub fn column_count(&self) -> usize {
        match self.tbl.child("tblGrid") {
            Some(grid) => grid.children_named("gridCol").count(),
            None => 0,
        }
    }

    /// The text of the cell at (row, column), `None` when out of range.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        let tr = self.tbl.children_named("tr").nth(row)?;
        let tc = tr.children_named("tc").nth(column)?;
        let tx_body = tc.child("txBody")?;
        Some(tx_body.text_recursive())
    }

    /// Row-major text of every cell.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.tbl
            .children_named("tr")
            .map(|tr| {
                tr.children_named("tc")
                    .map(|tc| {
                        tc.child("txBody")
                            .map(|b| b.text_recursive())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// The underlying `a:tbl` element.
    pub fn element(&self) -> &XmlElement {
        &self.tbl
    }
}
