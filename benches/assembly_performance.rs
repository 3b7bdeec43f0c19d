//! Performance benchmarks for training-set assembly
//!
//! This benchmark measures the two assembly paths against each other:
//!
//! 1. **Generated collocation points** (`CollocationSpec::Count`):
//!    - Cost is dominated by the per-axis random draws
//!    - Scales linearly with `points × problem_dim`
//!
//! 2. **Externally supplied points** (`CollocationSpec::ExplicitPoints`):
//!    - No sampling, only validation and the column split
//!    - Scales linearly with the row count
//!
//! The shuffle variant adds one permutation over the combined rows and is
//! expected to stay within a small constant factor of the plain path.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench assembly_performance
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pinnprep_rs::assembly::{AssemblyOptions, CollocationSpec, TrainingSetAssembler};
use pinnprep_rs::problem::{AxisBounds, ProblemSpec};

/// Boundary samples of the unit square: `samples` points per edge pair
fn boundary_samples(samples: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut x = Vec::with_capacity(samples);
    let mut y = Vec::with_capacity(samples);
    for i in 0..samples {
        let s = i as f64 / samples as f64;
        if i % 2 == 0 {
            x.push(vec![0.0, s]);
        } else {
            x.push(vec![s, 1.0]);
        }
        y.push(vec![s]);
    }
    (x, y)
}

fn unit_square_assembler() -> TrainingSetAssembler {
    let spec = ProblemSpec::steady(
        2,
        vec![AxisBounds::new(0.0, 1.0), AxisBounds::new(0.0, 1.0)],
    )
    .unwrap();
    TrainingSetAssembler::new(spec)
}

fn bench_generated_collocation(c: &mut Criterion) {
    let assembler = unit_square_assembler();
    let (x, y) = boundary_samples(200);

    let mut group = c.benchmark_group("assemble_generated");
    for count in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                assembler
                    .assemble(&x, &y, CollocationSpec::Count(count), None)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_explicit_collocation(c: &mut Criterion) {
    let assembler = unit_square_assembler();
    let (x, y) = boundary_samples(200);

    let mut group = c.benchmark_group("assemble_explicit");
    for count in [1_000usize, 10_000, 100_000] {
        let interior: Vec<Vec<f64>> = (0..count)
            .map(|i| {
                let s = (i % 997) as f64 / 997.0;
                vec![s, 1.0 - s]
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &interior,
            |b, interior| {
                b.iter(|| {
                    assembler
                        .assemble(
                            &x,
                            &y,
                            CollocationSpec::ExplicitPoints(interior.clone()),
                            None,
                        )
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_shuffled_assembly(c: &mut Criterion) {
    let assembler = unit_square_assembler();
    let (x, y) = boundary_samples(200);
    let options = AssemblyOptions::default().shuffle(true);

    c.bench_function("assemble_generated_shuffled_10k", |b| {
        b.iter(|| {
            assembler
                .assemble(&x, &y, CollocationSpec::Count(10_000), Some(&options))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_generated_collocation,
    bench_explicit_collocation,
    bench_shuffled_assembly
);
criterion_main!(benches);
