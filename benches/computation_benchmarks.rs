//! Performance benchmarks for the income tax engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use impot_engine::calculation::TaxEngine;
use impot_engine::models::{Household, MaritalStatus};
use impot_engine::simulator::{Simulator, TaxCalculator};

/// Builds a batch of varied, valid households.
fn households(count: usize) -> Vec<Household> {
    (0..count)
        .map(|i| {
            let status = MaritalStatus::ALL[i % MaritalStatus::ALL.len()];
            let income1 = 15_000 + (i as i64 * 7_919) % 400_000;
            let income2 = if status.is_couple() {
                (i as i64 * 3_571) % 150_000
            } else {
                0
            };
            let children = (i % 5) as i32;
            Household::new(status, income1, income2)
                .with_children(children, children.min((i % 2) as i32))
                .with_isolated_parent(!status.is_couple() && children > 0 && i % 3 == 0)
        })
        .collect()
}

fn bench_single_computation(c: &mut Criterion) {
    let engine = TaxEngine::default();
    let household = Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0);

    c.bench_function("single_computation", |b| {
        b.iter(|| engine.compute(black_box(&household)))
    });
}

fn bench_simulator_session(c: &mut Criterion) {
    c.bench_function("simulator_session", |b| {
        b.iter(|| {
            let mut simulator = Simulator::default();
            simulator.set_income_declarant1(black_box(100_000));
            simulator.set_marital_status(Some(MaritalStatus::Single));
            simulator.set_dependent_children(1);
            simulator.set_isolated_parent(true);
            let _ = simulator.compute_net_tax();
            simulator.render_result()
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let engine = TaxEngine::default();
    let mut group = c.benchmark_group("batch");

    for size in [100usize, 1_000] {
        let batch = households(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter_map(|h| engine.compute(h).ok())
                    .map(|r| r.net_tax)
                    .sum::<i64>()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_computation,
    bench_simulator_session,
    bench_batch
);
criterion_main!(benches);
