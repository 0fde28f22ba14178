use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_text::huffman::code_table::CodeTable;
use huffman_text::huffman::codec::encode;
use huffman_text::huffman::frequency::{count, tokenize, TokenMode};
use huffman_text::huffman::packer::pack;
use huffman_text::huffman::tree::HuffmanTree;

use crate::benchmarks::get_text;

fn encoding_benchmark(c: &mut Criterion) {
    let tokens = tokenize(&get_text(), TokenMode::Char);
    let tree = HuffmanTree::build(&count(&tokens)).unwrap();
    let table = CodeTable::generate(&tree);
    let bits = encode(&tokens, &table).unwrap();

    let mut group = c.benchmark_group("encoder benchmark");
    group.throughput(criterion::Throughput::Elements(tokens.len() as u64));
    group.sample_size(10);
    group.bench_function("encoding", |b| {
        b.iter(|| encode(black_box(&tokens), black_box(&table)).unwrap())
    });
    group.bench_function("packing", |b| b.iter(|| pack(black_box(&bits))));
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
    }
