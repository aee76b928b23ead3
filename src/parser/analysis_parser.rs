//! Async driver from document bytes to reconstructed pages.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::batch::{reconstruct_document, DocumentPages};
use crate::error::{Error, Result};
use crate::layout::PageStream;
use crate::model::Page;
use crate::provider::DocumentAnalyzer;

use super::LayoutOptions;

/// Runs a [`DocumentAnalyzer`] and reconstructs the pages of its result.
#[derive(Clone)]
pub struct DocumentAnalysisParser {
    analyzer: Arc<dyn DocumentAnalyzer>,
    options: LayoutOptions,
}

impl std::fmt::Debug for DocumentAnalysisParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAnalysisParser")
            .field("analyzer", &self.analyzer.name())
            .field("options", &self.options)
            .finish()
    }
}

impl DocumentAnalysisParser {
    /// Create a parser with default options.
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        Self::with_options(analyzer, LayoutOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(analyzer: Arc<dyn DocumentAnalyzer>, options: LayoutOptions) -> Self {
        Self { analyzer, options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Analyze `content` and return a stream over its pages.
    ///
    /// Fails only if the analyzer fails; the stream itself cannot.
    pub async fn parse(&self, content: &[u8]) -> Result<PageStream> {
        log::info!(
            "Extracting text from {} bytes using {}",
            content.len(),
            self.analyzer.name()
        );
        let result = self.analyzer.analyze(content).await?;
        Ok(PageStream::new(result, self.options.table_format))
    }

    /// Read a file and analyze it.
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> Result<PageStream> {
        let path = path.as_ref();
        log::debug!("Reading {}", path.display());
        let content = tokio::fs::read(path).await?;
        self.parse(&content).await
    }

    /// Analyze `content` and reconstruct every page on the blocking pool.
    pub async fn parse_all(&self, content: &[u8]) -> Result<DocumentPages> {
        log::info!(
            "Extracting text from {} bytes using {}",
            content.len(),
            self.analyzer.name()
        );
        let result = self.analyzer.analyze(content).await?;
        let options = self.options.clone();

        tokio::task::spawn_blocking(move || reconstruct_document(result, &options))
            .await
            .map_err(|e| Error::Channel(format!("Reconstruction task failed: {}", e)))
    }

    /// Analyze `content` on a background task and deliver pages through a
    /// bounded channel.
    ///
    /// Pages arrive in order. If the analyzer fails, its error is the only
    /// item sent. Dropping the receiver stops the task after the page it is
    /// currently sending. Must be called within a Tokio runtime.
    pub fn stream_pages(&self, content: Vec<u8>) -> mpsc::Receiver<Result<Page>> {
        let (rx, _producer) = self.spawn_pages(content);
        rx
    }

    /// Like [`stream_pages`](Self::stream_pages), also returning the producer
    /// task. The task resolves to the number of pages delivered to the
    /// channel.
    pub fn spawn_pages(
        &self,
        content: Vec<u8>,
    ) -> (mpsc::Receiver<Result<Page>>, JoinHandle<usize>) {
        let (tx, rx) = mpsc::channel(self.options.channel_capacity.max(1));
        let parser = self.clone();

        let producer = tokio::spawn(async move {
            let stream = match parser.parse(&content).await {
                Ok(stream) => stream,
                Err(e) => {
                    log::warn!("Document analysis failed: {}", e);
                    let _ = tx.send(Err(e)).await;
                    return 0;
                }
            };

            let mut sent = 0;
            for page in stream {
                let page_number = page.page_number;
                if tx.send(Ok(page)).await.is_err() {
                    log::debug!("Page receiver dropped at page {}; stopping", page_number);
                    break;
                }
                sent += 1;
            }
            sent
        });

        (rx, producer)
    }
}
