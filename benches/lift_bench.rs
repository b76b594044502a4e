//! Benchmark for the lift adapters.
//!
//! Measures the cost of the panic boundary on the success path and of
//! recovering from a panic on the failure path.

use criterion::{Criterion, criterion_group, criterion_main};
use railway::control::Iter;
use railway::lift::{as_maybe, as_outcome, try_outcome};
use std::hint::black_box;
use std::sync::Once;

static SILENCE_PANICS: Once = Once::new();

fn parse_strict(text: &str) -> i64 {
    text.parse().unwrap_or_else(|_| panic!("not a number: {text}"))
}

fn benchmark_lift_success(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lift_success");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(parse_strict(black_box("12345"))));
    });

    let lifted = as_outcome(parse_strict);
    group.bench_function("as_outcome", |bencher| {
        bencher.iter(|| black_box(lifted(black_box("12345"))));
    });

    let lifted = try_outcome(|text: &str| text.parse::<i64>());
    group.bench_function("try_outcome", |bencher| {
        bencher.iter(|| black_box(lifted(black_box("12345"))));
    });

    group.finish();
}

fn benchmark_lift_failure(criterion: &mut Criterion) {
    // The default hook would print every caught panic.
    SILENCE_PANICS.call_once(|| std::panic::set_hook(Box::new(|_| {})));

    let mut group = criterion.benchmark_group("lift_failure");

    let lifted = as_maybe(parse_strict);
    group.bench_function("as_maybe_panic", |bencher| {
        bencher.iter(|| black_box(lifted(black_box("oops"))));
    });

    let lifted = try_outcome(|text: &str| text.parse::<i64>());
    group.bench_function("try_outcome_error", |bencher| {
        bencher.iter(|| black_box(lifted(black_box("oops"))));
    });

    let inputs: Vec<String> = (0..1_000)
        .map(|index| if index % 10 == 0 { "x".to_string() } else { index.to_string() })
        .collect();
    let lifted = try_outcome(|text: &str| text.parse::<i64>());
    group.bench_function("batch_of_1000", |bencher| {
        bencher.iter(|| {
            let kept = Iter::new(inputs.iter().map(String::as_str)).map(&lifted).flatten_outcome();
            black_box(kept)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_lift_success, benchmark_lift_failure);

criterion_main!(benches);
