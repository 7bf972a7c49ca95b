// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use windfall_field::{FieldParams, field};
use windfall_grid::{LayoutParams, generate};

fn bench_step(c: &mut Criterion) {
    let params = FieldParams::default();
    let size = Size::new(1280.0, 720.0);

    let mut group = c.benchmark_group("field_step");
    for n in [9_usize, 64, 256, 1024] {
        let anchors = generate(n, size, &LayoutParams::default());
        let offsets = vec![Vec2::ZERO; n];
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("pointer_present/n{n}"), |b| {
            b.iter_batched(
                || offsets.clone(),
                |mut o| field::step(&anchors, &mut o, Some(Point::new(640.0, 360.0)), &params),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pointer_absent/n{n}"), |b| {
            b.iter_batched(
                || offsets.clone(),
                |mut o| field::step(&anchors, &mut o, None, &params),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
