//! Benchmarks for color literal scanning.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gutter_panels::parse_color_literal;

/// Generates a document-sized batch of lines, one in `stride` holding
/// a literal.
fn generate_lines(count: usize, stride: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i % stride == 0 {
                format!("let c{} = rgb({}, {}, {});", i, i % 256, (i * 7) % 256, 200)
            } else {
                format!("let value_{} = compute({});", i, i)
            }
        })
        .collect()
}

fn bench_single_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_line");

    let cases = [
        ("named", "selection = blue"),
        ("triple", "error = QColor(255, 0, 0)"),
        ("hex", "primary = #007ACC"),
        ("miss", "let value = compute(total);"),
        ("malformed", "broken = rgb(1,2"),
    ];

    for (name, line) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &line, |b, line| {
            b.iter(|| parse_color_literal(black_box(line)))
        });
    }

    group.finish();
}

fn bench_document_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_scan");

    for size in [100, 1000, 10000].iter() {
        let lines = generate_lines(*size, 10);

        group.bench_with_input(BenchmarkId::new("scan", size), &lines, |b, lines| {
            b.iter(|| {
                lines
                    .iter()
                    .filter_map(|line| parse_color_literal(black_box(line)))
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_lines, bench_document_scan);
criterion_main!(benches);
