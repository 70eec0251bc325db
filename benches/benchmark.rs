//! Performance benchmarks for Visconde

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use visconde::model::{tangle_root, ChunkName, ReferenceGraph};
use visconde::readers::parse_document;

fn generate_document(num_chunks: usize, lines_per_chunk: usize) -> String {
    let mut doc = String::from("# Benchmark Document\n\n");

    // Root chunk referencing every other chunk
    doc.push_str("```output.py\n");
    for i in 0..num_chunks {
        doc.push_str(&format!("@{{chunk{}}}\n", i));
    }
    doc.push_str("```\n\n");

    for i in 0..num_chunks {
        doc.push_str(&format!("Chunk {} explained.\n\n```chunk{}\n", i, i));
        for j in 0..lines_per_chunk {
            doc.push_str(&format!("print('chunk {} line {}')\n", i, j));
        }
        doc.push_str("```\n\n");
    }

    doc
}

fn generate_nested_document(depth: usize, breadth: usize) -> String {
    let mut doc = String::from("# Nested Benchmark\n\n");

    fn generate_chunk(doc: &mut String, name: &str, depth: usize, breadth: usize) {
        doc.push_str(&format!("```{}\n", name));
        if depth > 0 {
            doc.push_str("if True:\n");
            for i in 0..breadth {
                doc.push_str(&format!("    @{{{}_{}}}\n", name, i));
            }
        } else {
            doc.push_str("pass\n");
        }
        doc.push_str("```\n\n");

        if depth > 0 {
            for i in 0..breadth {
                generate_chunk(doc, &format!("{}_{}", name, i), depth - 1, breadth);
            }
        }
    }

    generate_chunk(&mut doc, "main", depth, breadth);
    doc
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for num_chunks in [10, 50, 100, 500].iter() {
        let doc = generate_document(*num_chunks, 10);
        group.bench_with_input(BenchmarkId::new("chunks", num_chunks), &doc, |b, doc| {
            b.iter(|| parse_document(black_box(doc), None))
        });
    }

    group.finish();
}

fn bench_reference_graph(c: &mut Criterion) {
    let doc = generate_document(500, 10);
    let parsed = parse_document(&doc, None);

    c.bench_function("reference_graph/500", |b| {
        b.iter(|| ReferenceGraph::build(black_box(&parsed.chunks)))
    });
}

fn bench_tangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangle");

    for num_chunks in [10, 100, 500].iter() {
        let parsed = parse_document(&generate_document(*num_chunks, 10), None);
        let root = ChunkName::new("output.py");
        group.bench_with_input(BenchmarkId::new("flat", num_chunks), &parsed, |b, parsed| {
            b.iter(|| tangle_root(black_box(&parsed.chunks), &root).unwrap())
        });
    }

    for (depth, breadth) in [(3, 3), (4, 4), (6, 2)].iter() {
        let parsed = parse_document(&generate_nested_document(*depth, *breadth), None);
        let root = ChunkName::new("main");
        group.bench_with_input(
            BenchmarkId::new("nested", format!("{}x{}", depth, breadth)),
            &parsed,
            |b, parsed| b.iter(|| tangle_root(black_box(&parsed.chunks), &root).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_reference_graph, bench_tangle);
criterion_main!(benches);
