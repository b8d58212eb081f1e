//! Benchmarks for the archive reader loop.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use arinspect_core::ArchiveReader;
use arinspect_core::ScanConfig;
use arinspect_core::test_utils::ArTestBuilder;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use std::io::Cursor;

/// Creates an archive with many small members.
fn create_many_small_members(member_count: usize) -> Vec<u8> {
    (0..member_count)
        .fold(ArTestBuilder::new().even_padding(), |builder, i| {
            builder.add_file(&format!("obj{i:05}.o"), format!("content{i}").as_bytes())
        })
        .build()
}

/// Creates an archive with a single large member.
fn create_large_member(size_bytes: usize) -> Vec<u8> {
    ArTestBuilder::new()
        .add_file("large.bin", &vec![0xAB_u8; size_bytes])
        .build()
}

fn bench_many_small_members(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_small_members");
    let config = ScanConfig::strict();

    for count in [10, 100, 1000] {
        let data = create_many_small_members(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| {
                let reader = ArchiveReader::new(Cursor::new(data.as_slice()), &config).unwrap();
                black_box(reader.read_members().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_large_member(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_member");
    let config = ScanConfig::default();

    for size in [1024 * 1024, 10 * 1024 * 1024] {
        let data = create_large_member(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let reader = ArchiveReader::new(Cursor::new(data.as_slice()), &config).unwrap();
                black_box(reader.read_members().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_many_small_members, bench_large_member);
criterion_main!(benches);
