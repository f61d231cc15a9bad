// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::cell::Cell;
use std::rc::Rc;
use understory_event_bus::EventBus;
use understory_event_handler::HandlerRef;

fn bench_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_bus/trigger");

    let hits = Rc::new(Cell::new(0_u64));
    let handler = {
        let hits = hits.clone();
        Rc::new(move |_: &str| hits.set(hits.get() + 1))
    };

    // Every fourth subscription listens for the triggered name; dispatch is a linear scan.
    for len in [16_usize, 128, 1_024] {
        let mut bus = EventBus::with_capacity(len);
        for i in 0..len {
            let name = if i % 4 == 0 { "click" } else { "hover" };
            bus.subscribe(name, HandlerRef::new(&handler)).unwrap();
        }
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("matching", len), &bus, |b, bus| {
            b.iter(|| black_box(bus.trigger(black_box("click"))));
        });
        group.bench_with_input(BenchmarkId::new("unmatched", len), &bus, |b, bus| {
            b.iter(|| black_box(bus.trigger(black_box("scroll"))));
        });
    }

    group.finish();
}

fn bench_subscribe_to_capacity(c: &mut Criterion) {
    let handler = Rc::new(|_: &str| {});
    c.bench_function("event_bus/subscribe_to_capacity_100", |b| {
        b.iter(|| {
            let mut bus = EventBus::new();
            while bus.subscribe("tick", HandlerRef::new(&handler)).is_ok() {}
            black_box(bus.len())
        });
    });
}

criterion_group!(benches, bench_trigger, bench_subscribe_to_capacity);
criterion_main!(benches);
