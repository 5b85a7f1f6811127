//! Benchmarks for the Caesar toolkit.
//!
//! Measures key derivation, encode throughput across input sizes, the full
//! 25-key search, and classification.

use caesar_toolkit::samples::{CLASSIFIER_SAMPLE, CRYPTOGRAM};
use caesar_toolkit::{brute_force, classify, derive_key, encode, CipherKey};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Input sizes in bytes for the throughput benchmarks.
const SIZES: &[usize] = &[64, 1024, 16 * 1024];

fn text_of_len(len: usize) -> String {
    CRYPTOGRAM.chars().cycle().take(len).collect()
}

fn bench_derive_key(c: &mut Criterion) {
    c.bench_function("derive_key", |b| b.iter(|| black_box(derive_key())));
}

/// Benchmarks `encode()` across input sizes with the derived key.
fn bench_encode(c: &mut Criterion) {
    let key = CipherKey::derived();
    let mut group = c.benchmark_group("encode");

    for &size in SIZES {
        let text = text_of_len(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| encode(black_box(text), key));
        });
    }

    group.finish();
}

/// Benchmarks the full 25-candidate key search.
fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");

    for &size in SIZES {
        let text = text_of_len(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| brute_force(black_box(text)));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_sample", |b| {
        b.iter(|| classify(black_box(CLASSIFIER_SAMPLE)));
    });
}

criterion_group!(
    benches,
    bench_derive_key,
    bench_encode,
    bench_brute_force,
    bench_classify,
);
criterion_main!(benches);
