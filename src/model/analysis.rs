//! Document analysis result types.
//!
//! These mirror the layout provider's JSON response (camelCase field names)
//! closely enough to decode it directly. Offsets and lengths count Unicode
//! scalar values in [`AnalyzeResult::content`].

use super::TableRegion;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A contiguous run of characters in a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First character of the run
    pub offset: usize,

    /// Number of characters in the run
    pub length: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last character of the run.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Check if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Ties a detected element to the page it visually appears on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// 1-indexed page number
    pub page_number: u32,

    /// Polygon corners as flat x/y pairs
    #[serde(default)]
    pub polygon: Vec<f32>,
}

impl BoundingRegion {
    /// Create a region on a 1-indexed page with no polygon.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            polygon: Vec::new(),
        }
    }
}

/// A page descriptor from the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedPage {
    /// 1-indexed page number
    pub page_number: u32,

    /// Page width in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Page height in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Measurement unit ("inch" or "pixel")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Ranges of the page in the global content buffer
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl AnalyzedPage {
    /// Create a page descriptor covering one span.
    pub fn new(page_number: u32, offset: usize, length: usize) -> Self {
        Self {
            page_number,
            spans: vec![Span::new(offset, length)],
            ..Self::default()
        }
    }

    /// The analyzed extent of the page: its first span.
    ///
    /// A page without spans has an empty extent.
    pub fn extent(&self) -> Span {
        self.spans.first().copied().unwrap_or_default()
    }
}

/// The full result of analyzing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Model used for the analysis (e.g. "prebuilt-layout")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Concatenated text of the whole document
    #[serde(default)]
    pub content: String,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<AnalyzedPage>,

    /// Detected tables
    #[serde(default)]
    pub tables: Vec<TableRegion>,
}

/// The provider's long-running operation envelope. `status` is required so
/// that a bare result never decodes as an envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationEnvelope {
    status: String,
    #[serde(default)]
    analyze_result: Option<AnalyzeResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeResponse {
    Envelope(OperationEnvelope),
    Bare(AnalyzeResult),
}

impl AnalyzeResult {
    /// Create a result over the given content with no pages or tables.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Add a page and return self.
    pub fn with_page(mut self, page: AnalyzedPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Add a table and return self.
    pub fn with_table(mut self, table: TableRegion) -> Self {
        self.tables.push(table);
        self
    }

    /// Decode a provider response.
    ///
    /// Accepts either the bare result object or the operation envelope
    /// (`{"status": "succeeded", "analyzeResult": {...}}`).
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Decode a provider response from raw bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<AnalyzeResponse>(data)? {
            AnalyzeResponse::Envelope(OperationEnvelope {
                analyze_result: Some(result),
                ..
            }) => Ok(result),
            AnalyzeResponse::Envelope(OperationEnvelope { status, .. }) => Err(
                Error::InvalidAnalysis(format!("operation status '{}' carries no result", status)),
            ),
            AnalyzeResponse::Bare(result) => Ok(result),
        }
    }

    /// Number of pages in the result.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the result has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
