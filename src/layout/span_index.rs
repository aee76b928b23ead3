//! Per-page table ownership index.
//!
//! Maps every character of a page to either plain text or the table that
//! owns it. Tables are identified by their position in the page's table
//! list.

use std::ops::Range;

use crate::model::TableRegion;

/// Ownership of each character on one page.
///
/// Spans are stamped in table order, then span order, so when two tables
/// claim the same character the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanIndex {
    slots: Vec<Option<usize>>,
    out_of_bounds: usize,
}

impl SpanIndex {
    /// Build the index for a page.
    ///
    /// `page_offset` is the page's start in the global content buffer and
    /// `page_length` its analyzed length. Table spans are given in global
    /// coordinates; the parts that fall outside
    /// `page_offset..page_offset + page_length` are ignored.
    pub fn build<'a, I>(page_offset: usize, page_length: usize, tables: I) -> Self
    where
        I: IntoIterator<Item = &'a TableRegion>,
    {
        let mut slots = vec![None; page_length];
        let mut out_of_bounds: usize = 0;
        let page_end = page_offset.saturating_add(page_length);

        for (table_id, table) in tables.into_iter().enumerate() {
            for span in &table.spans {
                let start = span.offset.max(page_offset);
                let end = span.end().min(page_end);
                if start < end {
                    slots[start - page_offset..end - page_offset].fill(Some(table_id));
                    out_of_bounds = out_of_bounds.saturating_add(span.length - (end - start));
                } else {
                    out_of_bounds = out_of_bounds.saturating_add(span.length);
                }
            }
        }

        Self {
            slots,
            out_of_bounds,
        }
    }

    /// Table owning the character at `index`, or `None` for plain text and
    /// positions past the end of the page.
    pub fn owner(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    /// Page length in characters.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the page has no characters.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of characters owned by some table.
    pub fn covered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of span characters that fell outside the page, saturating at
    /// `usize::MAX`.
    pub fn out_of_bounds(&self) -> usize {
        self.out_of_bounds
    }

    /// Raw per-character ownership.
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Maximal runs of characters sharing the same owner, in page order.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            slots: &self.slots,
            pos: 0,
        }
    }
}

/// A maximal run of characters with one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Local character range
    pub range: Range<usize>,
    /// Owning table, or `None` for plain text
    pub owner: Option<usize>,
}

/// Iterator over the runs of a [`SpanIndex`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    slots: &'a [Option<usize>],
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let owner = *self.slots.get(start)?;
        let len = self.slots[start..]
            .iter()
            .take_while(|&&slot| slot == owner)
            .count();
        self.pos = start + len;
        Some(Run {
            range: start..self.pos,
            owner,
        })
    }
}
