//! Merge plain text and table renderings into page text.

use std::collections::HashSet;

use crate::model::TableRegion;
use crate::render::TableFormat;

use super::SpanIndex;

/// Output of reconstructing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// Page text with tables flattened in
    pub text: String,

    /// Length of `text` in characters
    pub char_len: usize,

    /// Number of distinct tables rendered into `text`
    pub tables_emitted: usize,
}

/// Rebuilds page text from local characters and table ownership.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageReconstructor {
    format: TableFormat,
}

impl PageReconstructor {
    /// Create a reconstructor that renders tables in `format`.
    pub fn new(format: TableFormat) -> Self {
        Self { format }
    }

    /// Reconstruct one page.
    ///
    /// Plain characters are copied verbatim. The first character owned by a
    /// table is replaced by the table's full rendering; every later character
    /// of that table, including those of its other spans, produces nothing.
    /// `tables[id]` must be the table stamped as `id` in `index`.
    pub fn reconstruct(
        &self,
        local_text: &[char],
        index: &SpanIndex,
        tables: &[&TableRegion],
    ) -> Reconstruction {
        debug_assert_eq!(local_text.len(), index.len());

        let mut text = String::with_capacity(local_text.len());
        let mut char_len = 0;
        let mut emitted = HashSet::new();

        for run in index.runs() {
            match run.owner {
                None => {
                    let chars = local_text.get(run.range).unwrap_or_default();
                    text.extend(chars);
                    char_len += chars.len();
                }
                Some(table_id) => {
                    if !emitted.insert(table_id) {
                        continue;
                    }
                    let Some(table) = tables.get(table_id) else {
                        log::warn!("Span index refers to unknown table {}", table_id);
                        continue;
                    };
                    let rendered = self.format.render(table);
                    char_len += rendered.chars().count();
                    text.push_str(&rendered);
                }
            }
        }

        Reconstruction {
            text,
            char_len,
            tables_emitted: emitted.len(),
        }
    }
}
