//! Benchmarks for the station pool and the end-to-end order flow.
//!
//! Benchmarks cover:
//! - Uncontended acquire/release cycles
//! - Contended acquisition with FIFO hand-off
//! - End-to-end order throughput with short cook durations

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use galley::builders::build_galley;
use galley::config::GalleyConfig;
use galley::core::{Spawn, StationPool};
use galley::runtime::TokioClock;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

#[derive(Clone)]
struct BenchSpawner;

impl Spawn for BenchSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(fut);
    }
}

// ============================================================================
// Station Pool Benchmarks
// ============================================================================

fn bench_uncontended_acquire_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("station_acquire_release");

    for capacity in [1u32, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let pool = StationPool::new(capacity);
                b.to_async(Runtime::new().unwrap()).iter(|| {
                    let pool = Arc::clone(&pool);
                    async move {
                        let permit = pool.acquire().await;
                        black_box(&permit);
                        drop(permit);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_contended_handoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("station_contended_handoff");

    for waiters in [8u64, 32, 128] {
        group.throughput(Throughput::Elements(waiters));
        group.bench_with_input(
            BenchmarkId::from_parameter(waiters),
            &waiters,
            |b, &waiters| {
                b.to_async(Runtime::new().unwrap()).iter(|| async move {
                    let pool = StationPool::new(1);
                    let tasks: Vec<_> = (0..waiters)
                        .map(|_| {
                            let pool = Arc::clone(&pool);
                            tokio::spawn(async move {
                                let permit = pool.acquire().await;
                                drop(permit);
                            })
                        })
                        .collect();
                    for task in tasks {
                        task.await.unwrap();
                    }
                    black_box(pool.in_use());
                });
            },
        );
    }
    group.finish();
}

// ============================================================================
// End-to-End Order Benchmarks
// ============================================================================

fn bench_order_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_throughput");
    group.sample_size(20);

    for orders in [10u64, 50] {
        group.throughput(Throughput::Elements(orders));
        group.bench_with_input(
            BenchmarkId::from_parameter(orders),
            &orders,
            |b, &orders| {
                b.to_async(Runtime::new().unwrap()).iter(|| async move {
                    let cfg = GalleyConfig {
                        station_capacity: 8,
                        protein_cook_ms: 2,
                        starch_cook_ms: 1,
                    };
                    let galley = build_galley(&cfg, BenchSpawner, Arc::new(TokioClock)).unwrap();

                    let (tx, mut rx) = mpsc::unbounded_channel();
                    for _ in 0..orders {
                        let tx = tx.clone();
                        galley.submit(Box::new(move |result| {
                            let _ = tx.send(result.is_ok());
                        }));
                    }
                    drop(tx);

                    let mut completed = 0u64;
                    while completed < orders {
                        if rx.recv().await.is_some() {
                            completed += 1;
                        }
                    }
                    black_box(completed);

                    // Let retirements land before the next iteration.
                    tokio::time::sleep(Duration::from_millis(1)).await;
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    pool_benches,
    bench_uncontended_acquire_release,
    bench_contended_handoff
);

criterion_group!(order_benches, bench_order_throughput);

criterion_main!(pool_benches, order_benches);
