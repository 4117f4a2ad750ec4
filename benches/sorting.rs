use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use phasesort::{Natural, SortingMachine};

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("add_{n}"), |b| {
            b.iter_custom(|iters| {
                let values = random_values(n, 11);
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    // Fresh machine per iteration; reserve up front so the
                    // measurement sees pushes, not reallocation.
                    let mut machine = SortingMachine::with_capacity(Natural, n);
                    let start = Instant::now();
                    for &value in &values {
                        machine.add(value).unwrap();
                    }
                    total += start.elapsed();
                    black_box(machine);
                }
                total
            });
        });
    }
    group.finish();
}

fn bench_mode_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode_switch");
    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("change_to_extraction_mode_{n}"), |b| {
            b.iter_custom(|iters| {
                let mut master = SortingMachine::with_capacity(Natural, n);
                for value in random_values(n, 23) {
                    master.add(value).unwrap();
                }

                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    // The switch is one-shot, so each iteration restarts
                    // from a clone taken outside the timed window.
                    let mut machine = master.clone();
                    let start = Instant::now();
                    machine.change_to_extraction_mode().unwrap();
                    total += start.elapsed();
                    black_box(machine);
                }
                total
            });
        });
    }
    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drain_{n}"), |b| {
            b.iter_custom(|iters| {
                let mut master = SortingMachine::with_capacity(Natural, n);
                for value in random_values(n, 37) {
                    master.add(value).unwrap();
                }
                master.change_to_extraction_mode().unwrap();

                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut machine = master.clone();
                    let start = Instant::now();
                    while let Ok(value) = machine.remove_first() {
                        black_box(value);
                    }
                    total += start.elapsed();
                }
                total
            });
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    const N: usize = 100_000;

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("machine_full_lifecycle", |b| {
        b.iter_custom(|iters| {
            let values = random_values(N, 7);
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let input = values.clone();
                let start = Instant::now();
                let mut machine = SortingMachine::with_capacity(Natural, N);
                for value in input {
                    machine.add(value).unwrap();
                }
                machine.change_to_extraction_mode().unwrap();
                let sorted = machine.into_sorted_vec();
                total += start.elapsed();
                black_box(sorted);
            }
            total
        });
    });

    group.bench_function("vec_sort_unstable_baseline", |b| {
        b.iter_custom(|iters| {
            let values = random_values(N, 7);
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut input = values.clone();
                let start = Instant::now();
                input.sort_unstable();
                total += start.elapsed();
                black_box(input);
            }
            total
        });
    });

    group.finish();
}

criterion_group!(
    sorting,
    bench_insertion,
    bench_mode_switch,
    bench_extraction,
    bench_pipeline
);
criterion_main!(sorting);
