//! Error types for unlayout library.

use std::io;
use thiserror::Error;

/// Result type alias for unlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing page text.
///
/// Reconstruction itself never fails: bad spans and orphaned tables degrade
/// to plain text. Errors come from I/O, decoding provider output, or the
/// provider call.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis result could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis result decoded but cannot be used.
    #[error("Invalid analysis result: {0}")]
    InvalidAnalysis(String),

    /// The document analysis provider failed.
    #[error("Document analysis failed: {0}")]
    Analyzer(String),

    /// Error serializing reconstructed pages.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The page producer task stopped unexpectedly.
    #[error("Page channel error: {0}")]
    Channel(String),
}
