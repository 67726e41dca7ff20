// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for formula normalization, compilation, and evaluation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrille_engine::normalize_expression;
use quadrille_expr::CompiledExpression;

const FORMULAS: [(&str, &str); 4] = [
    ("linear", "2x + 1"),
    ("polynomial", "x^4 - 3x^2 + 2x - 7"),
    ("trig", "sin(2x) + cos(x / 2)"),
    ("nested", "sqrt(abs(sin(x^2))) + log(x^2 + 1)"),
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/normalize");

    for (label, source) in FORMULAS {
        group.bench_with_input(BenchmarkId::from_parameter(label), &source, |b, &source| {
            b.iter(|| black_box(normalize_expression(black_box(source))))
        });
    }
    group.bench_function("prefixed", |b| {
        b.iter(|| black_box(normalize_expression(black_box("y = 3x^2 - 2(x + 1)"))))
    });

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/compile");

    for (label, source) in FORMULAS {
        let normalized = normalize_expression(source);
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &normalized,
            |b, source| b.iter(|| black_box(CompiledExpression::parse(source).unwrap())),
        );
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/evaluate");
    group.throughput(Throughput::Elements(1));

    for (label, source) in FORMULAS {
        let expr = CompiledExpression::parse(&normalize_expression(source)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(label), &expr, |b, expr| {
            let mut x = 0.0;
            b.iter(|| {
                x += 0.125;
                black_box(expr.eval(black_box(x)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compile, bench_evaluate);
criterion_main!(benches);
