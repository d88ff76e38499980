/// Content hash benchmarks
/// Measures SHA-256 over whole upload buffers at typical sizes
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashdrop::domain::value_objects::ContentHash;
use std::time::Duration;

fn hash_computation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_hash");
    group.measurement_time(Duration::from_secs(10));

    for size in [1024, 64 * 1024, 1024 * 1024, 2 * 1024 * 1024].iter() {
        let size = *size;
        group.throughput(Throughput::Bytes(size as u64));

        let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::new("compute", size), &data, |b, data| {
            b.iter(|| std::hint::black_box(ContentHash::compute(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, hash_computation_benchmarks);
criterion_main!(benches);
