//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single reconstructed page.
///
/// `offset` is the index of the page's first character within the
/// concatenation of all earlier pages' `text`. Offsets and lengths count
/// Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (0-indexed)
    pub page_number: usize,

    /// Global character offset of the page's first character
    pub offset: usize,

    /// Reconstructed page text
    pub text: String,
}

impl Page {
    /// Create a new page.
    pub fn new(page_number: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            page_number,
            offset,
            text: text.into(),
        }
    }

    /// Length of the page text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Global offset one past the page's last character, which is where the
    /// next page starts.
    pub fn end_offset(&self) -> usize {
        self.offset + self.char_len()
    }

    /// Check if the page has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
