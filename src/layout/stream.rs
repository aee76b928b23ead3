//! Page stream producer.
//!
//! Turns one [`AnalyzeResult`] into an ordered sequence of [`Page`] records,
//! threading the running global offset from page to page.
//!
//! # Example
//!
//! ```
//! use unlayout::layout::PageStream;
//! use unlayout::model::{AnalyzeResult, AnalyzedPage};
//! use unlayout::render::TableFormat;
//!
//! let result = AnalyzeResult::new("hello world")
//!     .with_page(AnalyzedPage::new(1, 0, 6))
//!     .with_page(AnalyzedPage::new(2, 6, 5));
//!
//! let pages: Vec<_> = PageStream::new(result, TableFormat::Html).collect();
//! assert_eq!(pages[1].offset, 6);
//! assert_eq!(pages[1].text, "world");
//! ```

use std::collections::HashMap;
use std::iter::FusedIterator;

use crate::model::{AnalyzeResult, AnalyzedPage, Page, TableRegion};
use crate::render::{LayoutStats, TableFormat};

use super::{PageReconstructor, SpanIndex};

/// Lazy, finite, non-restartable stream of reconstructed pages.
///
/// The stream owns the analysis result it was built from; running it again
/// requires a new result. Pages are yielded in provider order, numbered from
/// 0, and each page's `offset` equals the previous page's offset plus its
/// character length.
#[derive(Debug)]
pub struct PageStream {
    content: Vec<char>,
    pages: Vec<AnalyzedPage>,
    tables: Vec<TableRegion>,
    tables_by_page: HashMap<usize, Vec<usize>>,
    reconstructor: PageReconstructor,
    next_page: usize,
    offset: usize,
    stats: LayoutStats,
}

impl PageStream {
    /// Create a stream over an analysis result.
    pub fn new(result: AnalyzeResult, format: TableFormat) -> Self {
        let AnalyzeResult {
            content,
            pages,
            tables,
            ..
        } = result;

        let mut stats = LayoutStats::new();
        let tables_by_page = assign_tables(&tables, pages.len(), &mut stats);
        if stats.orphaned_tables > 0 {
            log::warn!(
                "{} of {} tables have no matching page and will not be rendered",
                stats.orphaned_tables,
                tables.len()
            );
        }

        log::debug!(
            "PageStream: {} pages, {} tables, {} content chars",
            pages.len(),
            tables.len(),
            content.chars().count()
        );

        Self {
            content: content.chars().collect(),
            pages,
            tables,
            tables_by_page,
            reconstructor: PageReconstructor::new(format),
            next_page: 0,
            offset: 0,
            stats,
        }
    }

    /// Total number of pages in the stream, including those already yielded.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages not yet yielded.
    pub fn remaining(&self) -> usize {
        self.pages.len() - self.next_page
    }

    /// Check if every page has been yielded.
    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Global offset at which the next page will start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Statistics for the pages yielded so far.
    pub fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    fn produce(&mut self, page_index: usize) -> Page {
        let page = &self.pages[page_index];
        let extent = page.extent();
        let span_count = page.spans.len();
        let available = self.content.len().saturating_sub(extent.offset);
        let page_length = extent.length.min(available);
        if page_length < extent.length {
            log::warn!(
                "Page {} spans {}..{} but content has {} chars; truncating",
                page_index,
                extent.offset,
                extent.end(),
                self.content.len()
            );
        }
        if span_count > 1 {
            log::debug!(
                "Page {} has {} spans; using the first",
                page_index,
                span_count
            );
        }

        let tables: Vec<&TableRegion> = self
            .tables_by_page
            .get(&page_index)
            .map(|ids| ids.iter().map(|&i| &self.tables[i]).collect())
            .unwrap_or_default();

        let index = SpanIndex::build(extent.offset, page_length, tables.iter().copied());
        if index.out_of_bounds() > 0 {
            log::debug!(
                "Page {}: {} table span chars outside the page ignored",
                page_index,
                index.out_of_bounds()
            );
        }

        let start = extent.offset.min(self.content.len());
        let local_text = &self.content[start..start + page_length];
        let result = self.reconstructor.reconstruct(local_text, &index, &tables);

        self.stats.add_out_of_bounds(index.out_of_bounds());
        self.stats.add_page(result.char_len, result.tables_emitted);

        let produced = Page::new(page_index, self.offset, result.text);
        self.offset += result.char_len;
        produced
    }
}

impl Iterator for PageStream {
    type Item = Page;

    fn next(&mut self) -> Option<Self::Item> {
        let page_index = self.next_page;
        if page_index >= self.pages.len() {
            return None;
        }
        self.next_page += 1;
        Some(self.produce(page_index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageStream {}

impl FusedIterator for PageStream {}

/// Group table indices by the 0-indexed page they belong to, counting the
/// tables that match no page.
fn assign_tables(
    tables: &[TableRegion],
    page_count: usize,
    stats: &mut LayoutStats,
) -> HashMap<usize, Vec<usize>> {
    let mut by_page: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut orphaned = 0;

    for (i, table) in tables.iter().enumerate() {
        match table.page_index().filter(|&page| page < page_count) {
            Some(page) => by_page.entry(page).or_default().push(i),
            None => orphaned += 1,
        }
    }

    stats.add_orphaned(orphaned);
    by_page
}

/// Concatenate the text of every remaining page.
///
/// Page offsets index directly into the returned string (in characters).
pub fn collect_text(stream: PageStream) -> String {
    stream.map(|page| page.text).collect()
}
