use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fractal_renderer::{
    ColourMapKind, EscapeTimeAlgorithm, FractalKind, PixelRect, WorkerPool, colour_map_factory,
    render_raster, render_raster_serial,
};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const MAX_ITERATIONS: u32 = 256;

fn algorithm(kind: FractalKind) -> EscapeTimeAlgorithm {
    EscapeTimeAlgorithm::new(
        kind,
        PixelRect::new(WIDTH, HEIGHT).unwrap(),
        kind.default_viewport(),
        MAX_ITERATIONS,
    )
    .unwrap()
}

fn bench_pool_sizes(c: &mut Criterion) {
    let algorithm = algorithm(FractalKind::Mandelbrot);
    let colour_map = colour_map_factory(ColourMapKind::SmoothGradient, MAX_ITERATIONS);
    let mut group = c.benchmark_group("mandelbrot_320x240");

    group.bench_function("serial", |b| {
        b.iter(|| render_raster_serial(black_box(&algorithm), &colour_map).unwrap())
    });

    for threads in [1, 2, 4] {
        let pool = WorkerPool::new(threads).unwrap();
        group.bench_with_input(BenchmarkId::new("pool", threads), &pool, |b, pool| {
            b.iter(|| render_raster(black_box(&algorithm), &colour_map, pool).unwrap())
        });
    }

    group.finish();
}

fn bench_families(c: &mut Criterion) {
    let pool = WorkerPool::new(4).unwrap();
    let colour_map = colour_map_factory(ColourMapKind::SmoothGradient, MAX_ITERATIONS);
    let mut group = c.benchmark_group("families_4_threads");

    for &kind in FractalKind::ALL {
        let algorithm = algorithm(kind);
        let id = BenchmarkId::from_parameter(kind.file_stem());
        group.bench_with_input(id, &algorithm, |b, algorithm| {
            b.iter(|| render_raster(black_box(algorithm), &colour_map, &pool).unwrap())
        });
    }

    group.finish();
}

fn bench_palette_build(c: &mut Criterion) {
    c.bench_function("smooth_gradient_palette_1000", |b| {
        b.iter(|| colour_map_factory(ColourMapKind::SmoothGradient, black_box(1000)))
    });
}

criterion_group!(benches, bench_pool_sizes, bench_families, bench_palette_build);
criterion_main!(benches);
