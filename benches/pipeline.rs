//! Benchmarks for the extraction and compile pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wikimeta::{Node, compile, transform};

/// Build a wide document: `sections` top-level headings, each with nested
/// subsections full of links and references.
fn synthetic_document(sections: usize) -> Node {
    let mut children = Vec::new();
    for s in 0..sections {
        children.push(Node::heading(1, format!("Section {s}")));
        for sub in 0..8 {
            children.push(Node::heading(2 + (sub % 3) as u8, format!("Part {s}.{sub}")));
            let mut inline = Vec::new();
            for l in 0..10 {
                inline.push(Node::text("see "));
                inline.push(Node::link(
                    format!("./page-{}.md", (s * 7 + l) % 50),
                    Some("Page"),
                    format!("page {l}"),
                ));
                inline.push(Node::reference(
                    format!("ref-{}", l % 12),
                    format!("Ref {l}"),
                    "reference",
                ));
            }
            children.push(Node::container("paragraph", inline));
        }
    }
    for d in 0..10 {
        children.push(Node::definition(format!("ref-{d}"), format!("defs/{d}.md"), None));
    }
    Node::root(children)
}

fn bench_transform(c: &mut Criterion) {
    let tree = synthetic_document(50);
    c.bench_function("transform", |b| {
        b.iter(|| transform(black_box(&tree), "section-0.md"));
    });
}

fn bench_compile(c: &mut Criterion) {
    let tree = synthetic_document(50);
    let doc = transform(&tree, "section-0.md");
    c.bench_function("compile", |b| {
        b.iter(|| compile(black_box(&doc)));
    });
}

criterion_group!(benches, bench_transform, bench_compile);
criterion_main!(benches);
