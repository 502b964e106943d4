//! Table types.

use super::TextElement;
use serde::{Deserialize, Serialize};

/// A table float: labels and caption around optional tabular data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rhetorical label (e.g. "Results")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhetorical: Option<TextElement>,

    /// Table title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Table caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<TextElement>,

    /// Cell data, if the source provided it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataTable>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tabular data: rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Rows in the table, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<TableRow>>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,
}

impl DataTable {
    /// Create a new empty data table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data table with header.
    pub fn with_header(header_rows: u8) -> Self {
        Self {
            header_rows,
            ..Self::new()
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.get_or_insert_with(Vec::new).push(row);
    }

    /// Get the rows (empty if none were added).
    pub fn rows(&self) -> &[TableRow] {
        self.rows.as_deref().unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<TableCell>>,
}

impl TableRow {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.get_or_insert_with(Vec::new).push(cell);
    }

    /// Get the cells (empty if none were added).
    pub fn cells(&self) -> &[TableCell] {
        self.cells.as_deref().unwrap_or_default()
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: TextElement,

    /// Number of rows this cell spans
    pub rowspan: u32,

    /// Number of columns this cell spans
    pub colspan: u32,
}

impl TableCell {
    /// Create a cell spanning one row and one column.
    pub fn new(content: TextElement) -> Self {
        Self {
            content,
            rowspan: 1,
            colspan: 1,
        }
    }

    /// Set the row span.
    pub fn with_rowspan(mut self, span: u32) -> Self {
        self.rowspan = span.max(1);
        self
    }

    /// Set the column span.
    pub fn with_colspan(mut self, span: u32) -> Self {
        self.colspan = span.max(1);
        self
    }
}
