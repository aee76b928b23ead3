//! Layout options and the async analysis driver.

#[cfg(feature = "async")]
mod analysis_parser;
mod options;

#[cfg(feature = "async")]
pub use analysis_parser::DocumentAnalysisParser;
pub use options::{LayoutOptions, DEFAULT_CHANNEL_CAPACITY};
