use criterion::{black_box, criterion_group, criterion_main, Criterion};
use link_match::core::{
    has_any_move, ChipPicker, FillStrategy, GravityFill, Grid, LevelConfig, LinkController,
    NullView, ShuffleStrategy, SimpleRng, SimpleShuffle, ViewGrid,
};
use link_match::types::{ChipType, Coord};

fn random_grid(seed: u32) -> Grid {
    let mut grid = Grid::new(8, 8);
    grid.fill_random(&ChipPicker::default(), &mut SimpleRng::new(seed));
    grid
}

fn bench_has_any_move(c: &mut Criterion) {
    let playable = random_grid(12345);
    // Worst case: every region has size one, so the whole board is scanned.
    let mut dead = Grid::new(8, 8);
    for row in 0..8 {
        for col in 0..8 {
            let chip = ChipType::COLORS[((row + col) % 2) as usize];
            dead.set(Coord::new(row, col), chip);
        }
    }

    c.bench_function("has_any_move_random_8x8", |b| {
        b.iter(|| has_any_move(black_box(&playable), 3))
    });
    c.bench_function("has_any_move_dead_8x8", |b| {
        b.iter(|| has_any_move(black_box(&dead), 3))
    });
}

fn bench_gravity_fill(c: &mut Criterion) {
    let picker = ChipPicker::default();
    let mut rng = SimpleRng::new(1);

    c.bench_function("gravity_fill_clear_bottom_row", |b| {
        b.iter(|| {
            let mut grid = random_grid(7);
            for col in 0..8 {
                grid.set(Coord::new(0, col), ChipType::Empty);
            }
            let mut views = ViewGrid::new(8, 8);
            let mut view = NullView::new();
            let mut next = || picker.pick(&mut rng);
            GravityFill.fill(&mut grid, &mut views, &mut next, &mut view)
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut grid = random_grid(99);
    let mut rng = SimpleRng::new(99);
    let shuffle = SimpleShuffle::default();

    c.bench_function("shuffle_8x8", |b| b.iter(|| shuffle.shuffle(&mut grid, &mut rng)));
}

fn bench_resolve_link(c: &mut Criterion) {
    c.bench_function("controller_new_and_release", |b| {
        b.iter(|| {
            let mut view = NullView::new();
            let mut game = LinkController::new(LevelConfig::default(), black_box(12345), &mut view)
                .expect("default level is valid");
            game.press(Some(Coord::new(0, 0)), &mut view);
            game.drag(Some(Coord::new(1, 0)), &mut view);
            game.drag(Some(Coord::new(2, 0)), &mut view);
            game.release(&mut view)
        })
    });
}

criterion_group!(
    benches,
    bench_has_any_move,
    bench_gravity_fill,
    bench_shuffle,
    bench_resolve_link
);
criterion_main!(benches);
