use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha1::{Digest, Sha1};
use std::hint::black_box;

const SIZES: [usize; 3] = [64 * 1024, 1024 * 1024, 16 * 1024 * 1024];

pub fn bench_sha1_ref(c: &mut Criterion) {
    let message = vec![0u8; SIZES[SIZES.len() - 1]];

    let mut group = c.benchmark_group("sha1::Sha1");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut hasher = Sha1::new();
                hasher.update(black_box(&message[..size]));
                let _ = hasher.finalize();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha1_ref);
criterion_main!(benches);
