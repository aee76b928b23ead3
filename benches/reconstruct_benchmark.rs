//! Benchmarks for unlayout page reconstruction.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic analysis results with a table every few
//! hundred characters.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use unlayout::{
    AnalyzeResult, AnalyzedPage, LayoutOptions, PageStream, SpanIndex, TableCell, TableFormat,
    TableRegion,
};

const PAGE_CHARS: usize = 4000;
const TABLE_EVERY: usize = 500;
const TABLE_CHARS: usize = 120;

/// Creates a synthetic result with the given number of pages.
fn create_test_result(page_count: usize) -> AnalyzeResult {
    let line = "Benchmark test content for unlayout page reconstruction. ";
    let content: String = line.chars().cycle().take(page_count * PAGE_CHARS).collect();
    let mut result = AnalyzeResult::new(content);

    for page in 0..page_count {
        let page_offset = page * PAGE_CHARS;
        result = result.with_page(AnalyzedPage::new(
            (page + 1) as u32,
            page_offset,
            PAGE_CHARS,
        ));

        for start in (0..PAGE_CHARS).step_by(TABLE_EVERY) {
            let mut table = TableRegion::new(3, 3)
                .with_span(page_offset + start, TABLE_CHARS)
                .on_page((page + 1) as u32);
            for row in 0..3 {
                for col in 0..3 {
                    let cell = if row == 0 {
                        TableCell::header(row, col, format!("H{}", col))
                    } else {
                        TableCell::data(row, col, format!("<{}, {}> & more", row, col))
                    };
                    table = table.with_cell(cell);
                }
            }
            result = result.with_table(table);
        }
    }

    result
}

/// Benchmark span index construction for one page.
fn bench_span_index(c: &mut Criterion) {
    let result = create_test_result(1);

    c.bench_function("span_index_build", |b| {
        b.iter(|| SpanIndex::build(0, black_box(PAGE_CHARS), result.tables.iter()));
    });
}

/// Benchmark full page streams at various sizes.
fn bench_page_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_stream");

    for page_count in [1, 10, 50].iter() {
        let result = create_test_result(*page_count);

        for format in [TableFormat::Html, TableFormat::Text] {
            group.bench_function(format!("{}_pages_{:?}", page_count, format), |b| {
                b.iter_batched(
                    || result.clone(),
                    |result| PageStream::new(result, format).count(),
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

/// Benchmark sequential against parallel batches.
fn bench_batch(c: &mut Criterion) {
    let results: Vec<AnalyzeResult> = (0..16).map(|_| create_test_result(4)).collect();

    c.bench_function("batch_parallel", |b| {
        b.iter_batched(
            || results.clone(),
            |results| unlayout::reconstruct_documents(results, &LayoutOptions::default()),
            BatchSize::LargeInput,
        );
    });

    c.bench_function("batch_sequential", |b| {
        b.iter_batched(
            || results.clone(),
            |results| unlayout::reconstruct_documents(results, &LayoutOptions::new().sequential()),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_span_index, bench_page_stream, bench_batch);
criterion_main!(benches);
