use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphlife_core::{EngineConfig, Seeding, Universe};

fn random_universe(width: u32, height: u32) -> Universe {
    let mut config = EngineConfig::default();
    config.world.width = width;
    config.world.height = height;
    config.world.seed = Some(42);
    config.world.seeding = Seeding::Random { density: 0.3 };
    config.metrics.log_interval = 0;
    Universe::from_config(&config).expect("benchmark universe")
}

fn bench_tick(c: &mut Criterion) {
    let mut universe = random_universe(256, 256);
    c.bench_function("tick_256x256", |b| {
        b.iter(|| {
            universe.tick();
            black_box(universe.generation())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let universe = random_universe(314, 120);
    c.bench_function("render_314x120", |b| b.iter(|| black_box(universe.render())));
}

fn bench_write_glyphs(c: &mut Criterion) {
    let mut universe = random_universe(314, 120);
    c.bench_function("write_glyphs_10", |b| {
        b.iter(|| {
            universe.write_glyphs(10, 'K');
            black_box(universe.stats().glyphs)
        })
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_write_glyphs);
criterion_main!(benches);
