// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use windfall_grid::{LayoutParams, generate};

fn bench_generate(c: &mut Criterion) {
    let params = LayoutParams::default();
    let size = Size::new(1280.0, 720.0);

    let mut group = c.benchmark_group("grid_generate");
    for n in [9_usize, 64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| generate(black_box(n), black_box(size), &params));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
