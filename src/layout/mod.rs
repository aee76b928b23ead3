//! Layout reconstruction.
//!
//! Each page goes through three steps:
//!
//! 1. [`SpanIndex`] marks which characters of the page belong to a table.
//! 2. [`PageReconstructor`] copies plain characters and replaces each table's
//!    first character with the table's rendering.
//! 3. [`PageStream`] drives the first two over every page in order and
//!    assigns global offsets.

mod reconstruct;
mod span_index;
mod stream;

pub use reconstruct::{PageReconstructor, Reconstruction};
pub use span_index::{Run, Runs, SpanIndex};
pub use stream::{collect_text, PageStream};
