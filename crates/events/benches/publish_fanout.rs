use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mailboard_core::Topic;
use mailboard_events::{infallible, EventBus, InMemoryEventBus};

const TOPIC: Topic = Topic::from_static("model.record.added");

/// Fan-out cost of a single publish as the number of subscribers grows.
fn bench_publish_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fanout");

    for subscribers in [1usize, 8, 64, 512] {
        let bus: InMemoryEventBus<String> = InMemoryEventBus::new();
        let counter = Arc::new(AtomicU64::new(0));
        for _ in 0..subscribers {
            let counter = counter.clone();
            bus.subscribe(
                &TOPIC,
                infallible(move |_: &String| {
                    counter.fetch_add(1, Ordering::Relaxed);
                }),
            );
        }

        let payload = "someone@example.com".to_string();
        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, _| b.iter(|| bus.publish(black_box(&TOPIC), black_box(&payload))),
        );
    }

    group.finish();
}

/// A publish that re-enters the bus once per handler (intent → mutation → result).
fn bench_nested_publish(c: &mut Criterion) {
    let bus: Arc<InMemoryEventBus<String>> = Arc::new(InMemoryEventBus::new());
    let intent = Topic::from_static("view.intent.add");

    let relay = bus.clone();
    bus.subscribe(
        &intent,
        infallible(move |p: &String| relay.publish(&TOPIC, p)),
    );
    bus.subscribe(&TOPIC, infallible(|p: &String| {
        black_box(p.len());
    }));

    let payload = "someone@example.com".to_string();
    c.bench_function("nested_publish", |b| {
        b.iter(|| bus.publish(black_box(&intent), black_box(&payload)))
    });
}

criterion_group!(benches, bench_publish_fanout, bench_nested_publish);
criterion_main!(benches);
