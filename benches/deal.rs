use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::cards::Catalog;
use memory_match::core::{GameConfig, GameRng};
use memory_match::games::memory::{build_deck, TurnController};

fn catalog() -> Catalog {
    Catalog::from_names((0..47).map(|i| format!("img{i:02}"))).expect("catalog")
}

fn bench_build_deck(c: &mut Criterion) {
    let catalog = catalog();
    let mut rng = GameRng::new(42);

    c.bench_function("build_deck 6 of 47", |b| {
        b.iter(|| build_deck(black_box(catalog.images()), 6, &mut rng).expect("deal"))
    });
}

fn bench_start_and_tick(c: &mut Criterion) {
    let config = GameConfig::default().with_seed(42);
    let mut game = TurnController::new(catalog(), config).expect("controller");

    c.bench_function("start_game + 60s of ticks", |b| {
        b.iter(|| {
            game.start_game().expect("start");
            black_box(game.advance(Duration::from_secs(60)))
        })
    });
}

criterion_group!(benches, bench_build_deck, bench_start_and_tick);
criterion_main!(benches);
