use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use demine_core::{Board, BoardConfig, LayoutGenerator, MineLayout, Position, RandomLayoutGenerator};

fn bench_initialize(c: &mut Criterion) {
    let config = BoardConfig::new(200, 200, 8000);

    c.bench_function("initialize_200x200", |b| {
        b.iter(|| {
            let mut board = Board::new(black_box(config));
            board.initialize(RandomLayoutGenerator::new(42));
            board
        })
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    // a mineless grid makes one open reveal every cell, the worst case
    let layout = RandomLayoutGenerator::new(7).generate(BoardConfig::new(200, 200, 0));

    c.bench_function("flood_fill_200x200", |b| {
        b.iter_batched(
            || Board::from_layout(&layout),
            |mut board| {
                board.open_at(black_box(Position::new(100, 100)));
                board
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_adjacency_derivation(c: &mut Criterion) {
    let mines: Vec<Position> = (0u16..200)
        .map(|i| Position::new(i as u8, ((i * 37) % 200) as u8))
        .collect();
    let layout = MineLayout::from_mine_positions((200, 200), &mines).unwrap();

    c.bench_function("from_layout_200x200", |b| {
        b.iter(|| Board::from_layout(black_box(&layout)))
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_flood_fill,
    bench_adjacency_derivation
);
criterion_main!(benches);
