//! # Slot Pool Benchmark
//!
//! The pool sits on the per-frame path, so acquire/release churn and the
//! full-capacity active scan are the numbers that matter.
//!
//! Run with: `cargo bench --package marquee_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marquee_core::SlotPool;

/// A particle-sized entity payload.
#[derive(Clone, Copy, bytemuck::Zeroable)]
struct Particle {
    position: [f32; 2],
    velocity: [f32; 2],
    lifetime: f32,
    _pad: f32,
}

fn bench_acquire_release_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("acquire_release_churn");

    for capacity in [64u32, 1_024, 16_384] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut pool: SlotPool<Particle> = SlotPool::new(capacity).unwrap();
                b.iter(|| {
                    let (handle, _) = pool.acquire().unwrap();
                    pool.release(black_box(handle)).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_full_pool_cycle(c: &mut Criterion) {
    c.bench_function("fill_then_drain_1024", |b| {
        let mut pool: SlotPool<Particle> = SlotPool::new(1_024).unwrap();
        b.iter(|| {
            let mut handles = Vec::with_capacity(1_024);
            while let Ok((handle, _)) = pool.acquire() {
                handles.push(handle);
            }
            for handle in handles {
                pool.release(handle).unwrap();
            }
            pool.free_count()
        });
    });
}

fn bench_sparse_active_scan(c: &mut Criterion) {
    c.bench_function("iter_active_sparse_16384", |b| {
        let mut pool: SlotPool<Particle> = SlotPool::new(16_384).unwrap();
        // One slot in sixteen active; the scan still pays for capacity.
        let handles: Vec<_> = (0..16_384)
            .map(|_| pool.acquire().unwrap().0)
            .collect();
        for handle in handles.iter().filter(|h| h.index() % 16 != 0) {
            pool.release(*handle).unwrap();
        }

        b.iter(|| {
            let mut sum = 0.0f32;
            for (_, particle) in pool.iter_active() {
                sum += particle.lifetime;
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_acquire_release_churn,
    bench_full_pool_cycle,
    bench_sparse_active_scan
);
criterion_main!(benches);
