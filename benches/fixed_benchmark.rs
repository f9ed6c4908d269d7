// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Default, integer and float constructors
// 2. Copy - Clone and assignment
// 3. Handler Cost - The same workload against each stock handler
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use observable_fixed::prelude::*;
use std::hint::black_box;
use std::io;
use std::sync::Arc;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let handler: Arc<dyn EventHandler> = Arc::new(NoOpEventHandler);

    group.bench_function("default", |b| {
        b.iter(|| black_box(Fixed::new(Arc::clone(&handler))));
    });

    group.bench_function("from_int", |b| {
        b.iter(|| black_box(Fixed::from_int(black_box(42), Arc::clone(&handler))));
    });

    group.bench_function("from_float", |b| {
        b.iter(|| black_box(Fixed::from_float(black_box(42.42), Arc::clone(&handler))));
    });

    group.finish();
}

// ============================================================================
// Copy Benchmarks
// ============================================================================

fn benchmark_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    let handler: Arc<dyn EventHandler> = Arc::new(NoOpEventHandler);
    let source = Fixed::from_int(10, Arc::clone(&handler));

    group.bench_function("clone", |b| {
        b.iter(|| black_box(source.clone()));
    });

    group.bench_function("assign", |b| {
        let mut target = Fixed::new(Arc::clone(&handler));
        b.iter(|| {
            target.assign(black_box(&source));
        });
    });

    group.finish();
}

// ============================================================================
// Handler Cost Benchmarks
// Construct, write, read and drop one instance per iteration
// ============================================================================

fn benchmark_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler_cost");

    let noop: Arc<dyn EventHandler> = Arc::new(NoOpEventHandler);
    let tracing: Arc<dyn EventHandler> = Arc::new(LoggingEventHandler);
    let console: Arc<dyn EventHandler> = Arc::new(ConsoleEventHandler::new(io::sink()));
    let handlers = [("noop", noop), ("tracing", tracing), ("console_sink", console)];

    for (name, handler) in handlers {
        group.bench_with_input(BenchmarkId::from_parameter(name), &handler, |b, handler| {
            b.iter(|| {
                let mut x = Fixed::new(Arc::clone(handler));
                x.set_raw_bits(black_box(300));
                black_box(x.raw_bits())
            });
        });
    }

    group.bench_function("recording", |b| {
        let recorder = Arc::new(RecordingEventHandler::new());
        b.iter(|| {
            let mut x = Fixed::new(recorder.clone());
            x.set_raw_bits(black_box(300));
            let raw = x.raw_bits();
            drop(x);
            recorder.clear();
            black_box(raw)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_copy,
    benchmark_handlers
);
criterion_main!(benches);
