// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ui_events::keyboard::{Key, NamedKey};
use understory_element_tree::{Document, Element, ElementKind, ElementTree, NodeId};
use understory_grid_nav::{CellMatrix, CellPosition, build_matrix, step};

/// A `rows` by `cols` table where only the last column has text.
fn build_table(rows: usize, cols: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let table = doc.insert(None, Element::new(ElementKind::Table));
    for _ in 0..rows {
        let tr = doc.insert(Some(table), Element::new(ElementKind::TableRow));
        for col in 0..cols {
            let td = doc.insert(Some(tr), Element::new(ElementKind::DataCell));
            if col + 1 == cols {
                doc.set_text(td, "total");
            }
        }
    }
    (doc, table)
}

fn bench_build_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_step/build_matrix");
    for n in [8_usize, 32, 128] {
        let (doc, table) = build_table(n, n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(doc, table), |b, (doc, table)| {
            b.iter(|| black_box(build_matrix(doc, *table)));
        });
    }
    group.finish();
}

fn bench_skip_row(c: &mut Criterion) {
    // ArrowRight from the filled last column wraps and skips every empty cell.
    let mut group = c.benchmark_group("grid_step/skip_row");
    let right = Key::Named(NamedKey::ArrowRight);
    for n in [8_usize, 32, 128] {
        let (doc, table) = build_table(1, n);
        let matrix: CellMatrix<NodeId> = build_matrix(&doc, table);
        let start = CellPosition::new(0, n - 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, matrix| {
            b.iter(|| {
                black_box(step(matrix, Some(start), &right, |&cell| {
                    doc.has_text_content(cell)
                }))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_matrix, bench_skip_row);
criterion_main!(benches);
