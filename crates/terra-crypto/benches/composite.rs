use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use terra_crypto::{algorithm_digest, composite_digest, digest_reader, DEFAULT_CHUNK_SIZE};
use terra_types::COMPOSITION_ORDER;

fn make_data(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(7) ^ (i >> 3)) as u8)
        .collect()
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    for size in [1024usize, 65_536, 1_048_576] {
        let data = make_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("one_shot", size), &data, |b, data| {
            b.iter(|| composite_digest(black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("reader", size), &data, |b, data| {
            b.iter(|| digest_reader(Cursor::new(black_box(data)), DEFAULT_CHUNK_SIZE).unwrap());
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    let data = make_data(65_536);
    group.throughput(Throughput::Bytes(data.len() as u64));
    for alg in COMPOSITION_ORDER {
        group.bench_function(alg.name(), |b| {
            b.iter(|| algorithm_digest(alg, black_box(&data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_composite, bench_components);
criterion_main!(benches);
