//! Table types.

use super::{BoundingRegion, Span};
use serde::{Deserialize, Serialize};

/// A table detected by the document analysis provider.
///
/// Cells are kept in provider order; renderers impose their own ordering.
/// The table's page comes from its first bounding region and its position in
/// the content buffer from `spans`, which may be discontiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRegion {
    /// Number of rows in the grid
    pub row_count: usize,

    /// Number of columns in the grid
    #[serde(default)]
    pub column_count: usize,

    /// Cells in provider order
    #[serde(default)]
    pub cells: Vec<TableCell>,

    /// Regions tying the table to pages (1-indexed page numbers)
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,

    /// Character ranges of the table in the global content buffer
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl TableRegion {
    /// Create an empty table with the given grid size.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            ..Self::default()
        }
    }

    /// Add a cell and return self.
    pub fn with_cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Add a content span and return self.
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.spans.push(Span::new(offset, length));
        self
    }

    /// Place the table on a 1-indexed page and return self.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.bounding_regions.push(BoundingRegion::new(page_number));
        self
    }

    /// The 1-indexed page the table belongs to, taken from its first
    /// bounding region.
    pub fn page_number(&self) -> Option<u32> {
        self.bounding_regions.first().map(|r| r.page_number)
    }

    /// The 0-indexed position of the table's page in the result's page
    /// list. Page number 0 maps to no page.
    pub fn page_index(&self) -> Option<usize> {
        self.page_number()
            .and_then(|n| (n as usize).checked_sub(1))
    }

    /// Cells of row `row`, sorted by column index.
    ///
    /// The sort is stable, so cells sharing a column index keep provider
    /// order.
    pub fn row(&self, row: usize) -> Vec<&TableCell> {
        let mut cells: Vec<&TableCell> =
            self.cells.iter().filter(|c| c.row_index == row).collect();
        cells.sort_by_key(|c| c.column_index);
        cells
    }

    /// All `row_count` rows, each sorted by column index.
    pub fn rows(&self) -> Vec<Vec<&TableCell>> {
        (0..self.row_count).map(|i| self.row(i)).collect()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.cells.is_empty()
    }

    /// Check if the table has complex structure (merged cells).
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_merged)
    }

}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Cell role
    #[serde(default)]
    pub kind: CellKind,

    /// 0-indexed row
    pub row_index: usize,

    /// 0-indexed column
    pub column_index: usize,

    /// Number of rows this cell spans
    #[serde(default = "default_span")]
    pub row_span: u32,

    /// Number of columns this cell spans
    #[serde(default = "default_span")]
    pub column_span: u32,

    /// Cell text
    #[serde(default)]
    pub content: String,
}

fn default_span() -> u32 {
    1
}

impl TableCell {
    /// Create a data cell.
    pub fn data(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Content,
            row_index,
            column_index,
            row_span: 1,
            column_span: 1,
            content: content.into(),
        }
    }

    /// Create a column header cell.
    pub fn header(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            kind: CellKind::ColumnHeader,
            ..Self::data(row_index, column_index, content)
        }
    }

    /// Set the kind and return self.
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.column_span = span;
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    /// Check if the cell renders as a header.
    pub fn is_header(&self) -> bool {
        self.kind.is_header()
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }
}

/// Role of a cell as reported by the provider.
///
/// Unknown kinds decode as [`CellKind::Content`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Column header
    ColumnHeader,
    /// Row header
    RowHeader,
    /// Top-left cell above the row headers
    StubHead,
    /// Description cell
    Description,
    /// Ordinary data cell
    #[default]
    #[serde(other)]
    Content,
}

impl CellKind {
    /// Column and row headers render as `<th>`; every other kind is data.
    pub fn is_header(self) -> bool {
        matches!(self, CellKind::ColumnHeader | CellKind::RowHeader)
    }
}
