// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_element::{
    Element, ElementBase, Elements, RenderStatus, RenderTarget, ResourceHandle,
};

#[derive(Debug, Default)]
struct Cell {
    base: ElementBase,
}

impl Element for Cell {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> &'static str {
        "Cell"
    }

    fn render(&mut self, _: &mut dyn RenderTarget, _: &[ResourceHandle]) -> RenderStatus {
        RenderStatus::OK
    }
}

fn grid(side: usize) -> Elements {
    let mut els = Elements::new();
    for row in 0..side {
        for col in 0..side {
            let mut cell = Cell::default();
            cell.base_mut()
                .set_position(col as f64 * 10.0, row as f64 * 10.0);
            cell.base_mut().set_size(8.0, 8.0);
            els.insert(Box::new(cell));
        }
    }
    els
}

fn bench_base_hit_test(c: &mut Criterion) {
    let mut e = ElementBase::new();
    e.set_position(10.0, 10.0);
    e.set_size(100.0, 40.0);
    c.bench_function("element/base_hit_test", |b| {
        b.iter(|| black_box(e.hit_test(black_box(Point::new(50.0, 30.0)))));
    });
}

fn bench_set_size(c: &mut Criterion) {
    let mut e = ElementBase::new();
    e.set_min_size(10.0, 10.0).unwrap();
    e.set_max_size(50.0, 50.0).unwrap();
    c.bench_function("element/set_size_clamped", |b| {
        b.iter(|| black_box(e.set_size(black_box(5.0), black_box(100.0))));
    });
}

fn bench_container_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("element/container_hit_test");

    // Linear back-to-front scan; the query point lands in the first-inserted (back-most) cell.
    for side in [8_usize, 32, 64] {
        let els = grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &els, |b, els| {
            b.iter(|| black_box(els.hit_test(black_box(Point::new(4.0, 4.0)))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_base_hit_test,
    bench_set_size,
    bench_container_hit_test
);
criterion_main!(benches);
