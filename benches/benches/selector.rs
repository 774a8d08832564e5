// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_selector::{SelectionMode, SelectorConfig, SelectorGroup};

fn bench_multi_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector/multi_select_all");
    let config = SelectorConfig {
        mode: SelectionMode::Multiple,
        deselect_on_click: true,
    };

    // Each activation scans the selection, so selecting n items one by one is O(n^2).
    for len in [64_u32, 256, 1_024] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || SelectorGroup::new(config),
                |sel| {
                    for value in 0..len {
                        sel.notify(value);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector/fanout");
    for subscribers in [1_usize, 16, 128] {
        let sel = SelectorGroup::<u32>::new(SelectorConfig::default());
        for _ in 0..subscribers {
            sel.subscribe(|change| {
                black_box(change.latest);
            });
        }
        group.bench_with_input(BenchmarkId::from_parameter(subscribers), &sel, |b, sel| {
            let mut value = 0_u32;
            b.iter(|| {
                value = value.wrapping_add(1);
                sel.notify(value)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multi_select_all, bench_fanout);
criterion_main!(benches);
