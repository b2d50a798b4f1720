// SPDX-License-Identifier: MPL-2.0
use attract_loop::presentation::{card_emphasis, ease_in_out, parallax_offset};
use attract_loop::screensaver::fade::lerp;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn fade_curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fade_curve");

    group.bench_function("lerp_sweep", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for i in 0..=1000 {
                let t = i as f32 / 1000.0;
                total += lerp(black_box(0.0), black_box(0.85), t);
            }
            black_box(total)
        });
    });

    group.bench_function("ease_in_out_sweep", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for i in 0..=1000 {
                let t = i as f32 / 1000.0;
                total += ease_in_out(black_box(t));
            }
            black_box(total)
        });
    });

    group.finish();
}

fn presentation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");

    group.bench_function("card_emphasis_frame", |b| {
        b.iter(|| {
            // One frame's worth of cards at staggered progress values.
            for i in 0..5 {
                let progress = i as f32 / 4.0;
                let _ = black_box(card_emphasis(black_box(progress)));
            }
        });
    });

    group.bench_function("parallax_offset", |b| {
        b.iter(|| black_box(parallax_offset(black_box(413.0))));
    });

    group.finish();
}

criterion_group!(benches, fade_curve_benchmark, presentation_benchmark);
criterion_main!(benches);
