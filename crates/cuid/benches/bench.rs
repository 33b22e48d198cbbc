use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use cuid::CuidGenerator;

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_cuid(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/cuid");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let mut generator = CuidGenerator::with_fingerprint("a1b2");
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.cuid());
            }
        });
    });

    group.finish();
}

fn bench_slug(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/slug");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let mut generator = CuidGenerator::with_fingerprint("a1b2");
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.slug());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cuid, bench_slug);
criterion_main!(benches);
