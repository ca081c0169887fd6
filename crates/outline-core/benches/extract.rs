//! Benchmarks for extraction throughput over synthesized plan documents.

#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use outline_core::{numbered, section, title, DEFAULT_TITLE};

/// Build a plan document with `sections` level-2 sections of mixed prose,
/// bullets, and numbered items.
fn synthesize_plan(sections: usize) -> String {
    let mut doc = String::from("# Synthetic Plan\n\n");
    for i in 0..sections {
        doc.push_str(&format!("## Section {i}\n"));
        doc.push_str("Some introductory prose about this part of the plan.\n");
        for j in 0..6 {
            doc.push_str(&format!("- bullet item {j} with a few words\n"));
        }
        for j in 0..6 {
            doc.push_str(&format!("{}. ordered step {j}\n", j + 1));
        }
        doc.push('\n');
    }
    doc
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for sections in [10_usize, 100, 1000] {
        let doc = synthesize_plan(sections);
        // Worst case for the locator: the target is the final section.
        let last_label = format!("Section {}", sections - 1);
        group.throughput(Throughput::Bytes(doc.len() as u64));

        group.bench_with_input(BenchmarkId::new("title", sections), &doc, |b, doc| {
            b.iter(|| title(black_box(doc), DEFAULT_TITLE));
        });
        group.bench_with_input(BenchmarkId::new("section", sections), &doc, |b, doc| {
            b.iter(|| section(black_box(doc), &last_label));
        });
        group.bench_with_input(BenchmarkId::new("numbered", sections), &doc, |b, doc| {
            b.iter(|| numbered(black_box(doc), &last_label));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
