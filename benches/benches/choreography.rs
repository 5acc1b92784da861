// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use festoon_carousel::CardStrip;
use festoon_reveal::RevealSet;
use festoon_scroll::ScrollSample;
use festoon_tint::ColorStops;

fn bench_tint(c: &mut Criterion) {
    let mut group = c.benchmark_group("festoon_tint");

    let stops = ColorStops::celebration();
    group.bench_function("sample_celebration", |b| {
        let mut fraction = 0.0_f64;
        b.iter(|| {
            fraction = (fraction + 0.001).fract();
            black_box(stops.sample(black_box(fraction)))
        });
    });

    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("festoon_scroll");

    group.bench_function("sample_progress", |b| {
        let mut offset = 0.0_f64;
        b.iter(|| {
            offset = (offset + 17.0) % 4000.0;
            let sample = ScrollSample::new(offset, 800.0, 4800.0);
            black_box(sample.progress())
        });
    });

    group.finish();
}

fn bench_reveals(c: &mut Criterion) {
    let mut group = c.benchmark_group("festoon_reveal");

    for &targets in &[10_u32, 1_000_u32] {
        group.bench_function(format!("below_threshold_reports(n={targets})"), |b| {
            let mut reveals = RevealSet::new();
            for key in 0..targets {
                reveals.observe(key, 0.4);
            }
            let mut key = 0;
            b.iter(|| {
                key = (key + 1) % targets;
                // The steady-state cost: reports that do not latch.
                black_box(reveals.on_intersection(key, 0.2))
            });
        });
    }

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("festoon_carousel");

    group.bench_function("visible_range_and_fractions(n=1000)", |b| {
        let mut strip = CardStrip::new(1_000, 350.0, 64.0, 1_200.0);
        let mut offset = 0.0_f64;
        b.iter(|| {
            offset = (offset + 300.0) % strip.max_scroll();
            strip.set_scroll_offset(offset);
            let range = strip.visible_range();
            let mut acc = 0.0;
            for index in range {
                acc += strip.visible_fraction(index);
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tint, bench_progress, bench_reveals, bench_strip);
criterion_main!(benches);
