//! Scanner and extraction benchmarks
//!
//! Benchmarks the brace-depth scanner and the full extraction pipeline on
//! synthetic spec files of increasing size. Measures:
//! - Raw scan throughput over nested-brace text
//! - Declaration matching plus block bounding per file

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use specfall_core::{scan_block, TestExtractor};

/// Render a spec file with `suites` suites of `cases` cases each
fn render_spec(suites: usize, cases: usize) -> String {
    let mut text = String::new();
    for s in 0..suites {
        text.push_str(&format!("describe(\"suite_{}\", function()\n", s));
        for c in 0..cases {
            text.push_str(&format!(
                "  it(\"case_{}\", function() {{\n    assert.equals(compute({}), {})\n  }})\n",
                c, c, c
            ));
        }
        text.push_str("})\n");
    }
    text
}

fn bench_scan_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_nested");
    for depth in [8usize, 64, 512] {
        let text = format!("{}{}{}", "{".repeat(depth), "}".repeat(depth), "}");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, text| {
            b.iter(|| scan_block(black_box(text), 0));
        });
    }
    group.finish();
}

fn bench_extract_spec(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_spec");
    let extractor = TestExtractor::new();
    for (suites, cases) in [(1usize, 4usize), (8, 8), (32, 16)] {
        let text = render_spec(suites, cases);
        let label = format!("{}x{}", suites, cases);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &text, |b, text| {
            b.iter(|| extractor.extract(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan_nested, bench_extract_spec);
criterion_main!(benches);
