//! Integration tests for the async analysis driver.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use unlayout::model::{AnalyzeResult, AnalyzedPage, Page};
use unlayout::{
    DocumentAnalysisParser, DocumentAnalyzer, Error, JsonAnalyzer, LayoutOptions, Result,
    StaticAnalyzer, TableFormat, Unlayout,
};

const SAVED: &str = r#"{
    "content": "ABCDEFGHIJ",
    "pages": [{"pageNumber": 1, "spans": [{"offset": 0, "length": 10}]}],
    "tables": [{
        "rowCount": 1,
        "columnCount": 1,
        "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "X"}],
        "boundingRegions": [{"pageNumber": 1}],
        "spans": [{"offset": 2, "length": 3}]
    }]
}"#;

/// Analyzer that fails the way a rejected remote request would.
struct UnavailableAnalyzer;

#[async_trait]
impl DocumentAnalyzer for UnavailableAnalyzer {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn analyze(&self, _content: &[u8]) -> Result<AnalyzeResult> {
        Err(Error::Analyzer("503 Service Unavailable".to_string()))
    }
}

fn many_pages(count: usize) -> AnalyzeResult {
    let content: String = (0..count).map(|i| format!("p{:03}", i)).collect();
    (0..count).fold(AnalyzeResult::new(content), |result, i| {
        result.with_page(AnalyzedPage::new(i as u32 + 1, i * 4, 4))
    })
}

#[tokio::test]
async fn test_parse_saved_response() {
    let parser = DocumentAnalysisParser::new(Arc::new(JsonAnalyzer::new()));
    let pages: Vec<Page> = parser.parse(SAVED.as_bytes()).await.unwrap().collect();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].text, "AB<table><tr><td>X</td></tr></table>FGHIJ");
}

#[tokio::test]
async fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAVED.as_bytes()).unwrap();

    let parser = Unlayout::new()
        .with_table_format(TableFormat::Text)
        .with_analyzer(Arc::new(JsonAnalyzer::new()));
    let pages: Vec<Page> = parser.parse_file(file.path()).await.unwrap().collect();

    assert_eq!(pages[0].text, "ABXFGHIJ");
}

#[tokio::test]
async fn test_provider_error_from_parse() {
    let parser = DocumentAnalysisParser::new(Arc::new(UnavailableAnalyzer));
    let err = parser.parse(b"%PDF-1.7").await.unwrap_err();

    assert!(matches!(err, Error::Analyzer(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_provider_error_from_stream() {
    let parser = DocumentAnalysisParser::new(Arc::new(UnavailableAnalyzer));
    let mut rx = parser.stream_pages(b"%PDF-1.7".to_vec());

    let first = rx.recv().await;
    assert!(matches!(first, Some(Err(Error::Analyzer(_)))));
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_stream_pages_order_with_small_buffer() {
    let options = LayoutOptions::new().with_channel_capacity(2);
    let parser =
        DocumentAnalysisParser::with_options(Arc::new(StaticAnalyzer::new(many_pages(50))), options);
    let mut rx = parser.stream_pages(Vec::new());

    let mut expected_offset = 0;
    let mut count = 0;
    while let Some(page) = rx.recv().await {
        let page = page.unwrap();
        assert_eq!(page.page_number, count);
        assert_eq!(page.offset, expected_offset);
        assert_eq!(page.text, format!("p{:03}", count));
        expected_offset = page.end_offset();
        count += 1;
    }
    assert_eq!(count, 50);
}

#[tokio::test]
async fn test_dropped_receiver_stops_producer() {
    let options = LayoutOptions::new().with_channel_capacity(1);
    let parser =
        DocumentAnalysisParser::with_options(Arc::new(StaticAnalyzer::new(many_pages(100))), options);

    let (mut rx, producer) = parser.spawn_pages(Vec::new());
    let first = rx.recv().await.unwrap().unwrap();
    assert_eq!(first.page_number, 0);
    drop(rx);

    // The producer finishes on its own, well short of the full document.
    let sent = producer.await.unwrap();
    assert!(sent < 100);

    // A fresh stream still works after the previous consumer went away.
    let mut rx = parser.stream_pages(Vec::new());
    assert!(rx.recv().await.unwrap().is_ok());
}

#[tokio::test]
async fn test_stream_pages_empty_document() {
    let parser = DocumentAnalysisParser::new(Arc::new(StaticAnalyzer::default()));
    let mut rx = parser.stream_pages(Vec::new());
    assert!(rx.recv().await.is_none());
}
