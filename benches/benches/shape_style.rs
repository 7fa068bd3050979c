// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_shape_style` + `understory_shape`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;
use std::vec::Vec;

use kurbo::{Cap, Join};
use understory_shape::{RecordingSink, Shape};
use understory_shape_style::{
    Color, DefaultsRegistry, DefaultsTable, StyleAttr, StyleValue, VariantId, dash_eq,
};

fn hierarchy() -> (DefaultsRegistry, VariantId) {
    let mut registry = DefaultsRegistry::new();
    let base = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
    let mark = registry.declare_defaults(
        "Mark",
        Some(base),
        DefaultsTable::new()
            .with(StyleValue::Fill(Some(Color::WHITE)))
            .with(StyleValue::Opacity(0.8)),
    );
    let bar = registry.declare_defaults(
        "Bar",
        Some(mark),
        DefaultsTable::new()
            .with(StyleValue::Stroke(Some(Color::BLACK)))
            .with(StyleValue::StrokeWidth(2.0)),
    );
    (registry, bar)
}

fn bench_setters(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Shape={} StyleValue={} DefaultsTable={}",
            core::mem::size_of::<Shape>(),
            core::mem::size_of::<StyleValue>(),
            core::mem::size_of::<DefaultsTable>(),
        );
    });

    let (registry, bar) = hierarchy();
    let mut group = c.benchmark_group("shape/set");

    group.bench_function("stroke_width/unchanged", |b| {
        let mut shape = Shape::new(bar, &registry).unwrap();
        b.iter(|| black_box(shape.set_stroke_width(black_box(2.0))));
    });

    group.bench_function("stroke_width/changed", |b| {
        let mut shape = Shape::new(bar, &registry).unwrap();
        let mut width = 0.0;
        b.iter(|| {
            width += 1.0;
            black_box(shape.set_stroke_width(black_box(width)))
        });
    });

    group.bench_function("set_attr/unchanged", |b| {
        let mut shape = Shape::new(bar, &registry).unwrap();
        let values: Vec<StyleValue> = StyleAttr::ALL.iter().map(|&a| shape.attr(a)).collect();
        b.iter(|| {
            for value in &values {
                black_box(shape.set_attr(value.clone()));
            }
        });
    });

    group.finish();

    let mut group = c.benchmark_group("shape/line_dash");

    for len in [2_usize, 8, 32] {
        let pattern: Vec<f64> = (0..len).map(|i| (i % 5 + 1) as f64).collect();
        let fresh = pattern.clone();
        let (pattern, fresh) = (pattern.as_slice(), fresh.as_slice());

        group.bench_function(BenchmarkId::new("dash_eq", len), |b| {
            b.iter(|| black_box(dash_eq(Some(black_box(pattern)), Some(black_box(fresh)))));
        });

        group.bench_function(BenchmarkId::new("set/equal_contents", len), |b| {
            let mut shape = Shape::new(bar, &registry).unwrap();
            shape.set_line_dash(Some(pattern));
            b.iter(|| black_box(shape.set_line_dash(Some(black_box(fresh)))));
        });
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("declare/3_levels", |b| {
        b.iter(|| black_box(hierarchy()));
    });

    let (registry, bar) = hierarchy();
    group.bench_function("resolve", |b| {
        b.iter(|| black_box(registry.resolve(black_box(bar)).map(DefaultsTable::len)));
    });

    group.bench_function("is_override", |b| {
        b.iter(|| black_box(registry.is_override(black_box(bar), StyleAttr::Fill)));
    });

    group.bench_function("shape_new", |b| {
        b.iter(|| black_box(Shape::new(black_box(bar), &registry)));
    });

    group.finish();
}

fn bench_apply_and_restore(c: &mut Criterion) {
    let (registry, bar) = hierarchy();
    let mut group = c.benchmark_group("shape/apply");

    group.bench_function("defaults", |b| {
        let shape = Shape::new(bar, &registry).unwrap();
        let mut sink = RecordingSink::new();
        b.iter(|| {
            sink.clear();
            shape.apply_attributes(&mut sink);
            black_box(sink.ops().len())
        });
    });

    group.bench_function("fully_styled", |b| {
        let mut shape = Shape::new(bar, &registry).unwrap();
        shape.set_line_dash(Some(&[4.0, 2.0, 1.0, 2.0]));
        shape.set_line_dash_offset(1.0);
        shape.set_line_cap(Cap::Round);
        shape.set_line_join(Join::Bevel);
        let mut sink = RecordingSink::new();
        b.iter(|| {
            sink.clear();
            shape.apply_attributes(&mut sink);
            black_box(sink.ops().len())
        });
    });

    group.finish();

    let mut group = c.benchmark_group("shape/restore");

    group.bench_function("all/after_edits", |b| {
        b.iter_batched(
            || {
                let mut shape = Shape::new(bar, &registry).unwrap();
                shape.set_fill(None);
                shape.set_stroke_width(9.0);
                shape.set_opacity(0.1);
                shape
            },
            |mut shape| {
                black_box(shape.restore_all_styles(&registry));
                black_box(shape);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("overridden/clean", |b| {
        let mut shape = Shape::new(bar, &registry).unwrap();
        b.iter(|| black_box(shape.restore_overridden_styles(&registry)));
    });

    group.finish();
}

criterion_group!(benches, bench_setters, bench_registry, bench_apply_and_restore);
criterion_main!(benches);
