use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_text::huffman::frequency::TokenMode;
use huffman_text::huffman::{compress, decompress};

use crate::benchmarks::get_text;

fn decode_benchmark(c: &mut Criterion) {
    let text = get_text();
    let compressed = compress(&text, TokenMode::Char).unwrap();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(criterion::Throughput::Elements(compressed.stats.token_count as u64));
    group.sample_size(10);
    group.bench_function("decoding", |b| {
        b.iter(|| {
            decompress(
                black_box(&compressed.blob),
                black_box(&compressed.frequencies),
                TokenMode::Char,
            )
            .unwrap()
        })
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decode_benchmark
    }
