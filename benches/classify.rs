//! Criterion benchmark for classification at window scale.
//!
//! The engine runs on every UI update, so a full window pass has to stay
//! comfortably sub-millisecond.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use streamlens::core::ChatMessage;
use streamlens::engine::classify;

fn build_window(size: usize) -> Vec<ChatMessage> {
    let shapes = [
        "how do I get the overlay working?",
        "the stream keeps dropping frames, broken again",
        "please play the next map",
        "lol that was great",
    ];
    (0..size)
        .map(|i| ChatMessage {
            text: format!("{} #{i}", shapes[i % shapes.len()]),
            author: format!("viewer{i}"),
            timestamp: i as i64,
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let window_100 = build_window(100);
    c.bench_function("classify_window_100", |b| {
        b.iter(|| classify(black_box(&window_100)));
    });

    let window_1000 = build_window(1000);
    c.bench_function("classify_window_1000", |b| {
        b.iter(|| classify(black_box(&window_1000)));
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
