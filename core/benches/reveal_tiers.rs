use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mineboard_core::*;

fn bench_flood_fill(c: &mut Criterion) {
    // a single corner mine leaves one zero region covering the whole board
    let layout = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();

    c.bench_function("flood_fill_full_board", |b| {
        b.iter_batched(
            || Game::new(layout.clone()),
            |mut game| game.reveal(black_box((0, 0))).unwrap(),
            BatchSize::LargeInput,
        );
    });
}

fn bench_chord(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((30, 16), &[(0, 0)]).unwrap();
    let mut game = Game::new(layout);
    game.reveal((1, 1)).unwrap();
    game.toggle_flag((0, 0)).unwrap();

    c.bench_function("chord_into_opening", |b| {
        b.iter_batched(
            || game.clone(),
            |mut game| game.chord(black_box((1, 1))).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_flood_fill, bench_chord);
criterion_main!(benches);
