use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stop_signal::StopSignal;

fn is_stopped(c: &mut Criterion) {
    let signal = StopSignal::new();

    c.bench_function("is_stopped (running)", |b| {
        b.iter(|| black_box(signal.is_stopped()));
    });

    signal.stop();

    c.bench_function("is_stopped (stopped)", |b| {
        b.iter(|| black_box(signal.is_stopped()));
    });
}

fn stopped(c: &mut Criterion) {
    let signal = StopSignal::new();

    c.bench_function("stopped", |b| {
        b.iter(|| black_box(signal.stopped()));
    });
}

fn stop_start_cycle(c: &mut Criterion) {
    let signal = StopSignal::new();

    c.bench_function("stop + start", |b| {
        b.iter(|| {
            signal.stop();
            signal.start();
        });
    });
}

criterion_group!(benches, is_stopped, stopped, stop_start_cycle);
criterion_main!(benches);
