//! Data model for layout reconstruction.
//!
//! The input side ([`AnalyzeResult`] and friends) mirrors what a document
//! analysis provider reports; the output side is the [`Page`] record handed
//! to downstream chunkers.

mod analysis;
mod page;
mod table;

pub use analysis::{AnalyzeResult, AnalyzedPage, BoundingRegion, Span};
pub use page::Page;
pub use table::{CellKind, TableCell, TableRegion};
