use std::hint::black_box;

use bibd::{classify_basis, enumerate, row_basis, validate_by_definition, validate_by_identity, Matrix};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, SeedableRng};

/// Incidence matrix of the projective plane of order 2 (the Fano plane) or 3, built from the
/// difference sets {0, 1, 3} mod 7 and {0, 1, 3, 9} mod 13
fn cyclic_design(n: usize, diffs: &[usize]) -> Matrix {
    Matrix::build(n, n, |i, j| {
        if diffs.iter().any(|&d| (j + d) % n == i) {
            1
        } else {
            0
        }
    })
}

fn validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for (name, m) in [
        ("fano", cyclic_design(7, &[0, 1, 3])),
        ("pg2_3", cyclic_design(13, &[0, 1, 3, 9])),
    ] {
        group.bench_with_input(BenchmarkId::new("definition", name), &m, |b, m| {
            b.iter(|| validate_by_definition(black_box(m)))
        });
        group.bench_with_input(BenchmarkId::new("identity", name), &m, |b, m| {
            b.iter(|| validate_by_identity(black_box(m)))
        });
    }
    group.finish();
}

fn basis(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut group = c.benchmark_group("row_basis");
    for size in [16, 64, 128] {
        let m = Matrix::random(&mut rng, size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &m, |b, m| {
            b.iter(|| row_basis(black_box(m)))
        });
    }
    group.finish();
}

fn codewords(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut group = c.benchmark_group("codewords");
    for rank in [8, 12] {
        let basis = row_basis(&Matrix::random(&mut rng, rank, 2 * rank));
        group.bench_with_input(BenchmarkId::new("enumerate", rank), &basis, |b, basis| {
            b.iter(|| enumerate(black_box(basis)).map(|words| words.count()))
        });
        group.bench_with_input(BenchmarkId::new("classify", rank), &basis, |b, basis| {
            b.iter(|| classify_basis(black_box(basis), rank))
        });
    }
    group.finish();
}

criterion_group!(benches, validation, basis, codewords);
criterion_main!(benches);
