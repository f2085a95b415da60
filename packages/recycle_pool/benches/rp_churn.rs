//! Acquire/release churn benchmarks for the `recycle_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycle_pool::{DuplicateCheck, Pool};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const BUFFER_SIZE: usize = 4096;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_churn");

    group.bench_function("allocate_without_pool", |b| {
        b.iter(|| black_box(vec![0_u8; BUFFER_SIZE]));
    });

    let mut pool = Pool::builder(|| vec![0_u8; BUFFER_SIZE])
        .duplicate_check(DuplicateCheck::Disabled)
        .build();
    pool.ensure_count(1).unwrap();

    group.bench_function("acquire_release", |b| {
        b.iter(|| {
            let buffer = black_box(pool.acquire());
            pool.release(buffer).unwrap();
        });
    });

    group.bench_function("acquire_handle", |b| {
        b.iter(|| {
            let buffer = pool.acquire_handle();
            black_box(buffer.len());
        });
    });

    let mut checked_pool = Pool::builder(|| vec![0_u8; BUFFER_SIZE])
        .identity(|a: &Vec<u8>, b: &Vec<u8>| a.as_ptr() == b.as_ptr())
        .build();
    checked_pool.ensure_count(64).unwrap();

    group.bench_function("release_with_duplicate_check_64_free", |b| {
        b.iter(|| {
            let buffer = black_box(checked_pool.acquire());
            checked_pool.release(buffer).unwrap();
        });
    });

    group.finish();
}
