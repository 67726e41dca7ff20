// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `quadrille_viewport` coordinate mapping and grid spacing.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use quadrille_viewport::Viewport;

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/mapping");
    let vp = Viewport::new(Size::new(800.0, 600.0));

    // One conversion per pixel column, the shape of a redraw's inner loop.
    group.throughput(Throughput::Elements(801));
    group.bench_function("screen_to_world_row", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut x = 0.0;
            while x <= 800.0 {
                acc += vp.screen_to_world_x(black_box(x));
                x += 1.0;
            }
            black_box(acc)
        })
    });

    group.bench_function("roundtrip_point", |b| {
        let pt = Point::new(123.5, 456.25);
        b.iter(|| {
            let world = vp.screen_to_world(black_box(pt));
            black_box(vp.world_to_screen(world))
        })
    });

    group.finish();
}

fn bench_grid_spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/grid_spacing");

    for scale in [5.0, 50.0, 173.0, 500.0] {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        vp.set_scale(scale);
        group.bench_with_input(BenchmarkId::new("at_scale", scale), &vp, |b, vp| {
            b.iter(|| black_box(vp.grid_spacing()))
        });
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/zoom");
    let anchor = Point::new(620.0, 140.0);

    group.bench_function("zoom_about_anchor", |b| {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        b.iter(|| {
            // One step in, one step out keeps the scale inside its limits.
            black_box(vp.zoom_about_screen_point(black_box(anchor), 1.1));
            black_box(vp.zoom_about_screen_point(black_box(anchor), 1.0 / 1.1));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_grid_spacing, bench_zoom);
criterion_main!(benches);
