//! Benchmarks for the LCS diff engine in components/engine
//!
//! Performance-critical paths:
//! - `build_lcs_table`: O(N·M) table fill
//! - `Diff::verbose_diff`: character script and verbose rendering
//! - `Diff::line_diff`: line hashing, line script and line rendering

#![allow(missing_docs)]

use cdiff_engine::diff::{Diff, build_lcs_table};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Deterministic text of `len` characters with periodic edits between
/// variants, so the two sides share most of their content.
fn sample_text(len: usize, variant: usize) -> String {
    (0..len)
        .map(|i| {
            if (i + variant) % 17 == 0 {
                'x'
            } else {
                char::from(b'a' + u8::try_from(i % 23).unwrap_or(0))
            }
        })
        .collect()
}

/// Deterministic multi-line text where every seventh line differs between
/// variants.
fn sample_lines(lines: usize, variant: usize) -> String {
    (0..lines)
        .map(|i| {
            if (i + variant) % 7 == 0 {
                format!("    changed line {i} in variant {variant}")
            } else {
                format!("    let value_{i} = compute({i});")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_diff/build_table");

    for size in [64usize, 256, 1024] {
        let first: Vec<char> = sample_text(size, 0).chars().collect();
        let second: Vec<char> = sample_text(size, 3).chars().collect();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            &size,
            |b, _| b.iter(|| build_lcs_table(black_box(&first), black_box(&second)).lcs_len()),
        );
    }

    group.finish();
}

fn bench_verbose_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_diff/verbose");

    for size in [64usize, 256, 1024] {
        let (first, second) = (sample_text(size, 0), sample_text(size, 5));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &size,
            |b, _| b.iter(|| Diff::new(black_box(&first), black_box(&second)).verbose_diff()),
        );
    }

    group.finish();
}

fn bench_line_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_diff/line");

    for lines in [50usize, 200, 800] {
        let (first, second) = (sample_lines(lines, 0), sample_lines(lines, 2));

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{lines}_lines")),
            &lines,
            |b, _| {
                b.iter(|| {
                    Diff::new(black_box(&first), black_box(&second))
                        .line_diff()
                        .map(|patch| patch.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_table,
    bench_verbose_diff,
    bench_line_diff
);
criterion_main!(benches);
