use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_text::huffman::code_table::CodeTable;
use huffman_text::huffman::frequency::{count, tokenize, TokenMode};
use huffman_text::huffman::tree::HuffmanTree;

use crate::benchmarks::get_text;

fn tree_building_benchmark(c: &mut Criterion) {
    let tokens = tokenize(&get_text(), TokenMode::Char);
    let frequencies = count(&tokens);

    let mut group = c.benchmark_group("tree benchmark");
    group.bench_function("counting", |b| b.iter(|| count(black_box(&tokens))));
    group.bench_function("building", |b| {
        b.iter(|| HuffmanTree::build(black_box(&frequencies)).unwrap())
    });

    let tree = HuffmanTree::build(&frequencies).unwrap();
    group.bench_function("code generation", |b| {
        b.iter(|| CodeTable::generate(black_box(&tree)))
    });
    group.finish();
}

criterion_group! {
    name = tree_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = tree_building_benchmark
    }
