use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;
use zipf_dataset::{
    ColumnRngs, DatasetGenerator, GeneratorConfig, RecordWriter, WriteMode, ZipfSampler,
};

const ROWS: usize = 100_000;

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_column");
    group.throughput(Throughput::Elements(ROWS as u64));

    for alpha in [1.1, 1.4, 2.0] {
        let sampler = ZipfSampler::new(alpha, 149_197_297).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(alpha), &sampler, |b, s| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(s.sample_column(&mut rng, ROWS)));
        });
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_to");
    group.throughput(Throughput::Elements(ROWS as u64));

    let modes = [
        ("bulk", WriteMode::Bulk),
        (
            "chunked_4k",
            WriteMode::Chunked(NonZeroUsize::new(4_096).unwrap()),
        ),
    ];
    for (name, mode) in modes {
        let generator = DatasetGenerator::new(GeneratorConfig {
            record_count: ROWS as u64,
            write_mode: mode,
            ..GeneratorConfig::default()
        })
        .unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rngs = ColumnRngs::seeded(7);
                let mut writer = RecordWriter::new(std::io::sink());
                black_box(generator.write_to(&mut rngs, &mut writer).unwrap());
                writer.finish().unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampler, bench_write);
criterion_main!(benches);
