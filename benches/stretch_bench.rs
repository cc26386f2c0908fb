use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use std::hint::black_box;
use stretchmap::{Bounds, NormalizeOptions, Stretch, image, normalize, normalize_owned};

const SIZE: usize = 1024;

/// Synthetic 16-bit frame with a gradient and a bright spot
fn synthetic_frame() -> Array2<u16> {
    Array2::from_shape_fn((SIZE, SIZE), |(r, c)| {
        let dx = c as f64 - 700.0;
        let dy = r as f64 - 300.0;
        let spot = 40_000.0 * (-(dx * dx + dy * dy) / 2_000.0).exp();
        ((r + c) as f64 * 8.0 + spot).min(65_535.0) as u16
    })
}

// ============================================================================
// TIER 1: FULL PIPELINE BENCHMARKS
// ============================================================================

/// Every stretch over a borrowed integer frame
fn bench_normalize_stretches(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_stretch");
    let frame = synthetic_frame();

    for stretch in Stretch::ALL {
        let options = NormalizeOptions::new().with_stretch(stretch);
        group.bench_with_input(BenchmarkId::from_parameter(stretch), &options, |b, options| {
            b.iter(|| normalize(black_box(&frame), 0.0, 50_000.0, black_box(options)));
        });
    }

    group.finish();
}

/// Borrowed input versus reusing an owned f64 buffer
fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");
    let working = synthetic_frame().mapv(f64::from);
    let options = NormalizeOptions::new().with_stretch(Stretch::Log);

    group.bench_function("borrowed", |b| {
        b.iter(|| normalize(black_box(&working), 0.0, 50_000.0, &options));
    });

    group.bench_function("owned", |b| {
        b.iter_batched(
            || working.clone(),
            |buffer| normalize_owned(buffer, 0.0, 50_000.0, &options),
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// TIER 2: COMPONENT-LEVEL BENCHMARKS
// ============================================================================

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    let frame = synthetic_frame();

    group.bench_function("min_max", |b| {
        b.iter(|| Bounds::from_min_max(black_box(&frame)));
    });

    group.bench_function("percentiles_1_99", |b| {
        b.iter(|| Bounds::from_percentiles(black_box(&frame), 1.0, 99.0).unwrap());
    });

    group.finish();
}

fn bench_image_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_conversion");
    let frame = synthetic_frame();
    let options = NormalizeOptions::new().with_stretch(Stretch::Arcsinh);

    group.bench_function("gray", |b| {
        b.iter(|| image::to_gray_image(black_box(&frame), 0.0, 50_000.0, &options).unwrap());
    });

    group.bench_function("rgb", |b| {
        b.iter(|| image::to_rgb_image(black_box(&frame), 0.0, 50_000.0, &options).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_stretches,
    bench_buffer_reuse,
    bench_bounds,
    bench_image_conversion,
);

criterion_main!(benches);
