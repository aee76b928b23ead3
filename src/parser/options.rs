//! Layout options and configuration.

use crate::render::TableFormat;

/// Default capacity of the page channel used by
/// [`DocumentAnalysisParser::stream_pages`](super::DocumentAnalysisParser).
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Options for turning analysis results into pages.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// How tables are flattened into page text
    pub table_format: TableFormat,

    /// Whether batches of documents are reconstructed in parallel
    pub parallel: bool,

    /// Number of pages buffered between the producer task and its consumer
    pub channel_capacity: usize,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table format.
    pub fn with_table_format(mut self, format: TableFormat) -> Self {
        self.table_format = format;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the page channel capacity (at least 1).
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            table_format: TableFormat::Html,
            parallel: true,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
