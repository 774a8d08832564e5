// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_element_tree::{Document, Element, ElementFlags, ElementKind, NodeId};
use understory_focus_trap::{Boundary, boundaries, find_boundary};

/// A dialog-like container: `depth` levels of wrappers, `fanout` children each,
/// with focusable controls only at the leaves and every other wrapper hidden.
fn build_container(depth: u32, fanout: u32) -> (Document, NodeId, usize) {
    let mut doc = Document::new();
    let root = doc.insert(None, Element::new(ElementKind::Generic));
    let mut frontier = vec![root];
    let mut nodes = 1;
    for level in 0..depth {
        let mut next = Vec::new();
        for &parent in &frontier {
            for i in 0..fanout {
                let element = if level + 1 == depth {
                    Element::new(ElementKind::Button)
                } else if i % 2 == 1 {
                    Element::new(ElementKind::Generic).with_flags(ElementFlags::DISPLAY_NONE)
                } else {
                    Element::new(ElementKind::Generic)
                };
                next.push(doc.insert(Some(parent), element));
                nodes += 1;
            }
        }
        frontier = next;
    }
    (doc, root, nodes)
}

/// Worst case for the forward scan: everything before the last leaf is inert.
fn build_late_first(len: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.insert(None, Element::new(ElementKind::Generic));
    for _ in 1..len {
        doc.insert(Some(root), Element::new(ElementKind::Generic));
    }
    doc.insert(Some(root), Element::new(ElementKind::Input));
    (doc, root)
}

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_scan/boundaries");
    for (depth, fanout) in [(3_u32, 4_u32), (4, 6), (5, 8)] {
        let (doc, root, nodes) = build_container(depth, fanout);
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{depth}x{fanout}")),
            &(doc, root),
            |b, (doc, root)| b.iter(|| black_box(boundaries(doc, *root))),
        );
    }
    group.finish();
}

fn bench_first_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_scan/first_worst_case");
    for len in [64_usize, 1_024, 16_384] {
        let (doc, root) = build_late_first(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &(doc, root), |b, (doc, root)| {
            b.iter(|| black_box(find_boundary(doc, *root, Boundary::First)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_boundaries, bench_first_worst_case);
criterion_main!(benches);
