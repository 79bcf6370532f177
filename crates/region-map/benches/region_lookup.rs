//! Region lookup benchmarks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use region_map::{RegionGrid, classify, decode_boxel};

fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for count in [1, 1000, 100_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::new("boxel", count), &count, |b, &count| {
            b.iter(|| {
                for id in 0..count {
                    black_box(decode_boxel(black_box(id << 3 | 3)));
                }
            });
        });
    }

    group.finish();
}

fn lookup_benchmarks(c: &mut Criterion) {
    let grid = RegionGrid::embedded();
    let mut group = c.benchmark_group("lookup");

    let points = [
        ("sol", (0.0, 0.0, 0.0)),
        ("galactic_centre", (25.21875, -20.90625, 25899.96875)),
        ("colonia", (-9530.5, -910.28125, 19808.125)),
        ("outside", (-60000.0, 0.0, 0.0)),
    ];

    for (name, (x, y, z)) in points {
        group.bench_function(BenchmarkId::new("find_region", name), |b| {
            b.iter(|| black_box(grid.find_region(black_box(x), y, black_box(z))));
        });
    }

    group.bench_function("classify_sweep", |b| {
        b.iter(|| {
            for i in 0..1000u64 {
                black_box(classify(i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 20));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, decode_benchmarks, lookup_benchmarks);
criterion_main!(benches);
