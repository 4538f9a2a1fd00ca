use adb_music::app::visualizer::generate_heights;
use adb_music::ui::bars;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let heights = generate_heights(&mut rng, true, 15, 15);

    c.bench_function("render 15 bars", |b| {
        b.iter(|| bars::render(black_box(&heights), black_box(3)))
    });

    let wide = generate_heights(&mut rng, true, 120, 40);
    c.bench_function("render 120 bars", |b| {
        b.iter(|| bars::render(black_box(&wide), black_box(1)))
    });
}

fn bench_heights(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("generate heights", |b| {
        b.iter(|| generate_heights(&mut rng, black_box(true), 15, 15))
    });
}

criterion_group!(benches, bench_render, bench_heights);
criterion_main!(benches);
