//! Reconstruction statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected while reconstructing pages.
///
/// Counters saturate instead of overflowing.
///
/// None of these conditions are errors; they record where the output fell
/// back to plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of pages produced
    pub page_count: usize,

    /// Number of table renderings emitted
    pub table_count: usize,

    /// Tables with no bounding region or a page number matching no page
    pub orphaned_tables: usize,

    /// Table span characters that fell outside their page
    pub out_of_bounds_chars: usize,

    /// Characters of reconstructed text
    pub char_count: usize,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a produced page.
    pub fn add_page(&mut self, char_count: usize, tables_emitted: usize) {
        self.page_count = self.page_count.saturating_add(1);
        self.char_count = self.char_count.saturating_add(char_count);
        self.table_count = self.table_count.saturating_add(tables_emitted);
    }

    /// Record tables that will never be rendered.
    pub fn add_orphaned(&mut self, count: usize) {
        self.orphaned_tables = self.orphaned_tables.saturating_add(count);
    }

    /// Record span characters dropped for falling outside a page.
    pub fn add_out_of_bounds(&mut self, count: usize) {
        self.out_of_bounds_chars = self.out_of_bounds_chars.saturating_add(count);
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.page_count = self.page_count.saturating_add(other.page_count);
        self.table_count = self.table_count.saturating_add(other.table_count);
        self.orphaned_tables = self.orphaned_tables.saturating_add(other.orphaned_tables);
        self.out_of_bounds_chars = self
            .out_of_bounds_chars
            .saturating_add(other.out_of_bounds_chars);
        self.char_count = self.char_count.saturating_add(other.char_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_page() {
        let mut stats = LayoutStats::new();
        stats.add_page(10, 2);
        stats.add_page(5, 0);

        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.char_count, 15);
        assert_eq!(stats.table_count, 2);
    }

    #[test]
    fn test_merge() {
        let mut stats1 = LayoutStats {
            page_count: 2,
            table_count: 1,
            ..Default::default()
        };
        let stats2 = LayoutStats {
            page_count: 3,
            orphaned_tables: 1,
            out_of_bounds_chars: 7,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.page_count, 5);
        assert_eq!(stats1.table_count, 1);
        assert_eq!(stats1.orphaned_tables, 1);
        assert_eq!(stats1.out_of_bounds_chars, 7);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = LayoutStats::new();
        stats.add_out_of_bounds(usize::MAX);
        stats.add_out_of_bounds(usize::MAX);
        assert_eq!(stats.out_of_bounds_chars, usize::MAX);

        let mut total = stats.clone();
        total.merge(&stats);
        assert_eq!(total.out_of_bounds_chars, usize::MAX);
    }
}
