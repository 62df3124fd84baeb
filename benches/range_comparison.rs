//! Benchmark comparing stepped `Range<i64>` against `IntegerRange`
//!
//! The native range is the baseline for bounds that fit in a machine word;
//! the `IntegerRange` groups also run the same operations with bounds near
//! 2^200, where no native type can follow.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use integer_range::IntegerRange;
use num_bigint::BigInt;
use std::hint::black_box;
use std::ops::Range;

// Number of ranges per batch
const SMALL_SIZE: usize = 10_000;
const MEDIUM_SIZE: usize = 100_000;

// Elements walked per range in the iteration benchmarks
const WALK: i64 = 1_000;

/// Generate (range, step) pairs with native bounds
fn generate_std_ranges(count: usize) -> Vec<(Range<i64>, i64)> {
    (0..count as i64)
        .map(|i| (i..(i + (i % 1000) * 3), 1 + i % 3))
        .collect()
}

/// Generate the same progressions as `IntegerRange`, shifted by `offset`
fn generate_integer_ranges(count: usize, offset: &BigInt) -> Vec<IntegerRange> {
    (0..count as i64)
        .map(|i| {
            IntegerRange::new(offset + i, offset + i + (i % 1000) * 3, 1 + i % 3)
                .expect("step is never zero")
        })
        .collect()
}

fn offsets() -> [(&'static str, BigInt); 2] {
    [("small", BigInt::from(0)), ("2^200", BigInt::from(2).pow(200))]
}

/// Benchmark: Sum all lengths
fn bench_length_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_sum");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        let std_data = generate_std_ranges(size);
        group.bench_with_input(
            BenchmarkId::new("Range<i64>::step_by", size),
            &std_data,
            |b, data| {
                b.iter(|| {
                    let mut sum: usize = 0;
                    for (r, step) in data.iter() {
                        sum += r.clone().step_by(*step as usize).size_hint().0;
                    }
                    black_box(sum)
                })
            },
        );
        drop(std_data);

        for (label, offset) in offsets() {
            let big_data = generate_integer_ranges(size, &offset);
            group.bench_with_input(
                BenchmarkId::new(format!("IntegerRange/{label}"), size),
                &big_data,
                |b, data| {
                    b.iter(|| {
                        let mut sum: usize = 0;
                        for r in data.iter() {
                            sum += r.len().unwrap_or(usize::MAX);
                        }
                        black_box(sum)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Membership of a probe value
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        let std_data = generate_std_ranges(size);
        group.bench_with_input(
            BenchmarkId::new("Range<i64>", size),
            &std_data,
            |b, data| {
                b.iter(|| {
                    let mut count: usize = 0;
                    for (i, (r, step)) in data.iter().enumerate() {
                        let probe = i as i64 + 50;
                        if r.contains(&probe) && (probe - r.start) % step == 0 {
                            count += 1;
                        }
                    }
                    black_box(count)
                })
            },
        );
        drop(std_data);

        for (label, offset) in offsets() {
            let big_data = generate_integer_ranges(size, &offset);
            group.bench_with_input(
                BenchmarkId::new(format!("IntegerRange/{label}"), size),
                &big_data,
                |b, data| {
                    b.iter(|| {
                        let mut count: usize = 0;
                        for (i, r) in data.iter().enumerate() {
                            let probe = &offset + (i as i64 + 50);
                            if r.contains_integer(&probe) {
                                count += 1;
                            }
                        }
                        black_box(count)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Walk a single long range element by element
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");
    group.throughput(Throughput::Elements(WALK as u64));

    group.bench_function("Range<i64>", |b| {
        b.iter(|| {
            let mut sum: i64 = 0;
            for i in (0..WALK * 3).step_by(3) {
                sum = sum.wrapping_add(i);
            }
            black_box(sum)
        })
    });

    for (label, offset) in offsets() {
        let r = IntegerRange::new(offset.clone(), &offset + WALK * 3, 3).expect("step is never zero");
        group.bench_function(format!("IntegerRange/{label}"), |b| {
            b.iter(|| {
                let mut sum = BigInt::from(0);
                for i in &r {
                    sum += i;
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Benchmark: Random access at both ends
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for (label, offset) in offsets() {
        let r = IntegerRange::new(offset.clone(), &offset * 3 + 1_000_000, 7).expect("step is never zero");
        group.bench_function(format!("IntegerRange/{label}"), |b| {
            b.iter(|| {
                let first = r.get(black_box(0)).ok();
                let last = r.get(black_box(-1)).ok();
                black_box((first, last))
            })
        });
    }

    group.finish();
}

/// Benchmark: Creation performance
fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");

    let size = SMALL_SIZE;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("Range<i64>", |b| {
        b.iter(|| {
            let data: Vec<Range<i64>> = (0..size as i64)
                .map(|i| black_box(i)..black_box(i + 100))
                .collect();
            black_box(data)
        })
    });

    group.bench_function("IntegerRange", |b| {
        b.iter(|| {
            let data: Vec<IntegerRange> = (0..size as i64)
                .map(|i| IntegerRange::from_bounds(black_box(i), black_box(i + 100)))
                .collect();
            black_box(data)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_length_sum,
    bench_contains,
    bench_iteration,
    bench_get,
    bench_creation,
);

criterion_main!(benches);
