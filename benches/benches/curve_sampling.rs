// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for per-column curve sampling and full-frame rendering.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use quadrille_engine::{PlotEngine, sample_curve};
use quadrille_expr::{Compiler, ExpressionCompiler};
use quadrille_surface::RecordingSurface;
use quadrille_viewport::Viewport;

fn bench_sample_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/sample_curve");
    let compiler = Compiler::new();

    for (label, source) in [
        ("polynomial", "x^3 - 2*x + 1"),
        ("trig", "sin(x) * cos(2*x)"),
        ("pole", "1/x"),
    ] {
        let expr = compiler.compile(source).unwrap();
        for width in [800.0_f64, 1920.0] {
            let vp = Viewport::new(Size::new(width, 600.0));
            group.throughput(Throughput::Elements(width as u64 + 1));
            group.bench_with_input(BenchmarkId::new(label, width), &vp, |b, vp| {
                b.iter(|| black_box(sample_curve(expr.as_ref(), vp)))
            });
        }
    }

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/render");

    let mut engine = PlotEngine::new(Size::new(800.0, 600.0));
    for source in ["x^2 / 8 - 2", "sin(2x)", "1/x", "tan(x)"] {
        engine.add_function(source).unwrap();
    }

    group.bench_function("four_functions_800x600", |b| {
        b.iter_batched(
            RecordingSurface::new,
            |mut surface| {
                engine.render(&mut surface);
                black_box(surface);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_sample_curve, bench_full_frame);
criterion_main!(benches);
