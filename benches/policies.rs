//! Per-policy operation benchmarks.
//!
//! Run with: `cargo bench --bench policies`
//!
//! Every policy runs the same three workloads so results compare directly:
//! hits on a warm cache, a miss-heavy insert stream that evicts on every
//! put, and a mixed random workload over a key universe twice the capacity.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use evictkit::builder::{Cache, CacheBuilder, CachePolicy};
use evictkit::traits::CoreCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 4_096;
const OPS: u64 = 10_000;

fn warm(policy: CachePolicy) -> Cache<u64, u64> {
    let mut cache = CacheBuilder::new(CAPACITY).build(policy);
    for i in 0..CAPACITY as u64 {
        cache.insert(i, i);
    }
    cache
}

// ============================================================================
// Get Hit
// ============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.throughput(Throughput::Elements(OPS));

    for policy in CachePolicy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            let mut cache = warm(policy);
            b.iter(|| {
                for i in 0..OPS {
                    black_box(cache.get(&(i % CAPACITY as u64)));
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Insert With Eviction
// ============================================================================

fn bench_insert_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_evict");
    group.throughput(Throughput::Elements(OPS));

    for policy in CachePolicy::ALL.into_iter().filter(|p| p.is_bounded()) {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            let mut cache = warm(policy);
            let mut next = CAPACITY as u64;
            b.iter(|| {
                for _ in 0..OPS {
                    black_box(cache.insert(next, next));
                    next += 1;
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Mixed Random Workload
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_random");
    group.throughput(Throughput::Elements(OPS));

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let universe = (CAPACITY * 2) as u64;
    let trace: Vec<(bool, u64)> = (0..OPS)
        .map(|_| (rng.gen_bool(0.3), rng.gen_range(0..universe)))
        .collect();

    for policy in CachePolicy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            let mut cache = warm(policy);
            b.iter(|| {
                for &(write, key) in &trace {
                    if write {
                        black_box(cache.insert(key, key));
                    } else {
                        black_box(cache.get(&key));
                    }
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_insert_evict, bench_mixed);
criterion_main!(benches);
