//! Reconstruction of many documents at once.

use rayon::prelude::*;

use crate::layout::PageStream;
use crate::model::{AnalyzeResult, Page};
use crate::parser::LayoutOptions;
use crate::render::LayoutStats;

/// Pages and statistics of one reconstructed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentPages {
    /// Pages in document order
    pub pages: Vec<Page>,

    /// Statistics collected while producing `pages`
    pub stats: LayoutStats,
}

impl DocumentPages {
    /// Concatenated text of all pages.
    pub fn text(&self) -> String {
        self.pages.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Reconstruct every page of one analysis result.
pub fn reconstruct_document(result: AnalyzeResult, options: &LayoutOptions) -> DocumentPages {
    let mut stream = PageStream::new(result, options.table_format);
    let pages: Vec<Page> = stream.by_ref().collect();
    DocumentPages {
        pages,
        stats: stream.stats().clone(),
    }
}

/// Reconstruct many documents independently.
///
/// Runs on the rayon pool when `options.parallel` is set. The output is in
/// input order either way.
pub fn reconstruct_documents(
    results: Vec<AnalyzeResult>,
    options: &LayoutOptions,
) -> Vec<DocumentPages> {
    log::debug!(
        "Reconstructing {} documents ({})",
        results.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if options.parallel && results.len() > 1 {
        results
            .into_par_iter()
            .map(|result| reconstruct_document(result, options))
            .collect()
    } else {
        results
            .into_iter()
            .map(|result| reconstruct_document(result, options))
            .collect()
    }
}

/// Sum the statistics of a batch.
pub fn total_stats(documents: &[DocumentPages]) -> LayoutStats {
    documents.iter().fold(LayoutStats::new(), |mut total, doc| {
        total.merge(&doc.stats);
        total
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalyzedPage;

    fn document(text: &str) -> AnalyzeResult {
        AnalyzeResult::new(text).with_page(AnalyzedPage::new(1, 0, text.chars().count()))
    }

    #[test]
    fn test_batch_preserves_order() {
        let results: Vec<AnalyzeResult> = (0..32).map(|i| document(&format!("doc {}", i))).collect();

        for options in [LayoutOptions::default(), LayoutOptions::new().sequential()] {
            let docs = reconstruct_documents(results.clone(), &options);
            assert_eq!(docs.len(), 32);
            for (i, doc) in docs.iter().enumerate() {
                assert_eq!(doc.text(), format!("doc {}", i));
            }
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(reconstruct_documents(Vec::new(), &LayoutOptions::default()).is_empty());
    }

    #[test]
    fn test_total_stats() {
        let docs = reconstruct_documents(
            vec![document("abc"), document("de")],
            &LayoutOptions::default(),
        );
        let total = total_stats(&docs);
        assert_eq!(total.page_count, 2);
        assert_eq!(total.char_count, 5);
    }
}
