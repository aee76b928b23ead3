//! # unlayout
//!
//! Page-by-page text reconstruction from document layout analysis.
//!
//! A layout provider returns the whole document as one string plus page
//! ranges and table regions. This library turns that result into an ordered
//! sequence of pages whose text has each table flattened in place (as HTML by
//! default), together with each page's offset in the reconstructed document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlayout::pages_from_file;
//!
//! fn main() -> unlayout::Result<()> {
//!     // A saved provider response
//!     for page in pages_from_file("analysis.json")? {
//!         println!("page {} @ {}: {}", page.page_number, page.offset, page.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table flattening**: HTML with header cells and merged-cell spans, or
//!   tab-separated text
//! - **Global offsets**: each page's offset counts characters of the
//!   reconstructed text before it
//! - **Lazy streaming**: pages are built one at a time, either as an iterator
//!   or through a bounded channel fed by a background task
//! - **Pluggable providers**: anything implementing `DocumentAnalyzer`
//! - **Parallel batches**: uses Rayon across documents

pub mod batch;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "async")]
pub mod provider;

// Re-export commonly used types
pub use batch::{reconstruct_documents, DocumentPages};
pub use error::{Error, Result};
pub use layout::{collect_text, PageReconstructor, PageStream, SpanIndex};
pub use model::{
    AnalyzeResult, AnalyzedPage, BoundingRegion, CellKind, Page, Span, TableCell, TableRegion,
};
#[cfg(feature = "async")]
pub use parser::DocumentAnalysisParser;
pub use parser::LayoutOptions;
#[cfg(feature = "async")]
pub use provider::{DocumentAnalyzer, JsonAnalyzer, StaticAnalyzer};
pub use render::{table_to_html, JsonFormat, LayoutStats, TableFormat};

use std::path::Path;

/// Reconstruct the pages of an analysis result with HTML tables.
///
/// # Example
///
/// ```
/// use unlayout::{pages_from_analysis, AnalyzeResult, AnalyzedPage};
///
/// let result = AnalyzeResult::new("one two")
///     .with_page(AnalyzedPage::new(1, 0, 4))
///     .with_page(AnalyzedPage::new(2, 4, 3));
///
/// let pages: Vec<_> = pages_from_analysis(result).collect();
/// assert_eq!(pages[1].text, "two");
/// assert_eq!(pages[1].offset, 4);
/// ```
pub fn pages_from_analysis(result: AnalyzeResult) -> PageStream {
    PageStream::new(result, TableFormat::Html)
}

/// Decode a saved provider response and reconstruct its pages.
///
/// Accepts the bare result or the operation envelope.
pub fn pages_from_json(json: &str) -> Result<PageStream> {
    let result = AnalyzeResult::from_json(json)?;
    Ok(pages_from_analysis(result))
}

/// Read a saved provider response from disk and reconstruct its pages.
///
/// # Example
///
/// ```no_run
/// use unlayout::pages_from_file;
///
/// let text = unlayout::collect_text(pages_from_file("analysis.json").unwrap());
/// println!("{}", text);
/// ```
pub fn pages_from_file<P: AsRef<Path>>(path: P) -> Result<PageStream> {
    let data = std::fs::read(path)?;
    let result = AnalyzeResult::from_slice(&data)?;
    Ok(pages_from_analysis(result))
}

/// Builder for reconstructing pages from analysis results.
///
/// # Example
///
/// ```no_run
/// use unlayout::{TableFormat, Unlayout};
///
/// let pages: Vec<_> = Unlayout::new()
///     .with_table_format(TableFormat::Text)
///     .parse_file("analysis.json")?
///     .collect();
/// # Ok::<(), unlayout::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unlayout {
    options: LayoutOptions,
}

impl Unlayout {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how tables are flattened.
    pub fn with_table_format(mut self, format: TableFormat) -> Self {
        self.options = self.options.with_table_format(format);
        self
    }

    /// Disable parallel processing of batches.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the page channel capacity used by async streaming.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.with_channel_capacity(capacity);
        self
    }

    /// Get the accumulated options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Reconstruct pages of an already decoded result.
    pub fn reconstruct(&self, result: AnalyzeResult) -> PageStream {
        PageStream::new(result, self.options.table_format)
    }

    /// Decode a saved provider response and reconstruct its pages.
    pub fn parse_json(&self, json: &str) -> Result<PageStream> {
        Ok(self.reconstruct(AnalyzeResult::from_json(json)?))
    }

    /// Read a saved provider response and reconstruct its pages.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<PageStream> {
        let data = std::fs::read(path)?;
        Ok(self.reconstruct(AnalyzeResult::from_slice(&data)?))
    }

    /// Reconstruct many results with these options.
    pub fn reconstruct_all(&self, results: Vec<AnalyzeResult>) -> Vec<DocumentPages> {
        reconstruct_documents(results, &self.options)
    }

    /// Build an async parser around `analyzer` with these options.
    #[cfg(feature = "async")]
    pub fn with_analyzer(
        &self,
        analyzer: std::sync::Arc<dyn DocumentAnalyzer>,
    ) -> DocumentAnalysisParser {
        DocumentAnalysisParser::with_options(analyzer, self.options.clone())
    }
}
