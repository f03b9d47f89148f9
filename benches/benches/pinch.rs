// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_pinch` + `understory_image_fit`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_image_fit::{ImageFit, ImageGeometry, compute_display_size};
use understory_pinch::{PinchController, PinchRecognizer, PinchSample};

const VIEWPORT: Size = Size::new(1170.0, 2532.0);

/// A pinch that zooms in and drifts across the screen, one sample per frame.
fn scripted_samples(len: usize) -> Vec<PinchSample> {
    let mut samples = Vec::with_capacity(len + 2);
    samples.push(PinchSample::begin(Point::new(585.0, 1266.0)));
    for i in 0..len {
        let t = i as f64 / len as f64;
        let focal = Point::new(585.0 + 200.0 * t, 1266.0 - 300.0 * t);
        samples.push(PinchSample::active(1.0 + 3.0 * t, focal));
    }
    samples.push(PinchSample::end(4.0, Point::new(785.0, 966.0)));
    samples
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/controller");

    for len in [60usize, 600, 6_000] {
        let samples = scripted_samples(len);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::new("on_sample", len), &samples, |b, samples| {
            b.iter_batched(
                || PinchController::new(VIEWPORT),
                |mut pinch| {
                    for &sample in samples {
                        black_box(pinch.on_sample(sample));
                    }
                    black_box(pinch);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("recognizer_then_controller", len),
            &len,
            |b, &len| {
                b.iter_batched(
                    || (PinchRecognizer::new(), PinchController::new(VIEWPORT)),
                    |(mut recognizer, mut pinch)| {
                        for i in 0..len {
                            let focal = Point::new(585.0 + i as f64 * 0.1, 1266.0);
                            for sample in recognizer.pinch_delta(0.001, focal) {
                                black_box(pinch.on_sample(sample));
                            }
                        }
                        if let Some(end) = recognizer.release() {
                            black_box(pinch.on_sample(end));
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/fit");

    group.bench_function("compute_display_size", |b| {
        b.iter(|| compute_display_size(black_box(Size::new(4032.0, 3024.0)), black_box(VIEWPORT)));
    });

    group.bench_function("resolve_metadata", |b| {
        b.iter_batched(
            || {
                let mut fit = ImageFit::new(VIEWPORT);
                let generation = fit.request(Some("bench.jpg")).map_or(0, |r| r.generation);
                (fit, generation)
            },
            |(mut fit, generation)| {
                black_box(fit.resolve(generation, Ok(ImageGeometry::new(4032.0, 3024.0))));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_controller, bench_fit);
criterion_main!(benches);
