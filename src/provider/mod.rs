//! Document analysis providers.
//!
//! A provider takes raw document bytes and returns the structural analysis
//! ([`AnalyzeResult`]) that page reconstruction works from. Remote services
//! implement [`DocumentAnalyzer`] outside this crate; the implementations here
//! cover saved responses and fixed results.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::AnalyzeResult;

/// Trait for document analysis backends.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Short name of the backend, used in log messages.
    fn name(&self) -> &str;

    /// Analyze a document.
    async fn analyze(&self, content: &[u8]) -> Result<AnalyzeResult>;
}

#[async_trait]
impl<T: DocumentAnalyzer + ?Sized> DocumentAnalyzer for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn analyze(&self, content: &[u8]) -> Result<AnalyzeResult> {
        (**self).analyze(content).await
    }
}

/// Analyzer that treats its input as a saved provider response.
///
/// Both the bare result and the operation envelope are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAnalyzer;

impl JsonAnalyzer {
    /// Create a new JSON analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentAnalyzer for JsonAnalyzer {
    fn name(&self) -> &str {
        "json"
    }

    async fn analyze(&self, content: &[u8]) -> Result<AnalyzeResult> {
        log::debug!("Decoding saved analysis ({} bytes)", content.len());
        AnalyzeResult::from_slice(content)
    }
}

/// Analyzer that ignores its input and returns a fixed result.
#[derive(Debug, Clone, Default)]
pub struct StaticAnalyzer {
    result: AnalyzeResult,
}

impl StaticAnalyzer {
    /// Create an analyzer that always returns `result`.
    pub fn new(result: AnalyzeResult) -> Self {
        Self { result }
    }
}

#[async_trait]
impl DocumentAnalyzer for StaticAnalyzer {
    fn name(&self) -> &str {
        "static"
    }

    async fn analyze(&self, _content: &[u8]) -> Result<AnalyzeResult> {
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::AnalyzedPage;

    #[tokio::test]
    async fn test_json_analyzer_decodes_envelope() {
        let body = br#"{"status": "succeeded", "analyzeResult": {"content": "abc", "pages": [{"pageNumber": 1, "spans": [{"offset": 0, "length": 3}]}]}}"#;
        let result = JsonAnalyzer::new().analyze(body).await.unwrap();
        assert_eq!(result.content, "abc");
        assert_eq!(result.page_count(), 1);
    }

    #[tokio::test]
    async fn test_json_analyzer_rejects_garbage() {
        let err = JsonAnalyzer::new().analyze(b"%PDF-1.7").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_static_analyzer_ignores_input() {
        let fixed = AnalyzeResult::new("fixed").with_page(AnalyzedPage::new(1, 0, 5));
        let analyzer = StaticAnalyzer::new(fixed.clone());
        assert_eq!(analyzer.analyze(b"anything").await.unwrap(), fixed);
        assert_eq!(analyzer.name(), "static");
    }

    #[tokio::test]
    async fn test_arc_analyzer_delegates() {
        let analyzer: Arc<dyn DocumentAnalyzer> = Arc::new(JsonAnalyzer::new());
        assert_eq!(analyzer.name(), "json");
        let result = analyzer.analyze(br#"{"content": ""}"#).await.unwrap();
        assert!(result.is_empty());
    }
}
