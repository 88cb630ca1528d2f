//! Shuffle tests - multiset preservation and the retry bound

use link_match::core::{
    has_any_move, shuffle_until_playable, Grid, RandomSource, ShuffleStrategy, SimpleRng,
    SimpleShuffle,
};
use link_match::types::ChipType::{Blue as B, Green as G, Red as R, Yellow as Y};

fn dead_board() -> Grid {
    Grid::from_rows(&[
        vec![R, B, G, Y],
        vec![B, G, Y, R],
        vec![G, Y, R, B],
        vec![Y, R, B, G],
    ])
    .unwrap()
}

/// Reports every board as dead.
struct NeverPlayable;

impl ShuffleStrategy for NeverPlayable {
    fn has_any_move(&self, _grid: &Grid) -> bool {
        false
    }

    fn shuffle(&self, grid: &mut Grid, rng: &mut dyn RandomSource) {
        SimpleShuffle::default().shuffle(grid, rng);
    }
}

#[test]
fn test_shuffle_preserves_multiset() {
    let mut grid = dead_board();
    let before = grid.sorted_values();
    let mut rng = SimpleRng::new(7);

    for _ in 0..20 {
        SimpleShuffle::default().shuffle(&mut grid, &mut rng);
        assert_eq!(grid.sorted_values(), before);
    }
}

#[test]
fn test_playable_board_is_not_shuffled() {
    let mut grid = Grid::from_rows(&[vec![R, R, R], vec![B, G, Y], vec![G, Y, B]]).unwrap();
    let before = grid.clone();
    let mut rng = SimpleRng::new(1);

    let report = shuffle_until_playable(&SimpleShuffle::default(), &mut grid, &mut rng, 50);
    assert_eq!(report.attempts, 0);
    assert!(report.playable);
    assert!(!report.shuffled());
    assert_eq!(grid, before);
}

#[test]
fn test_dead_board_outcome_matches_report() {
    let mut grid = dead_board();
    assert!(!has_any_move(&grid, 3));
    let before = grid.sorted_values();
    let mut rng = SimpleRng::new(2024);

    let report = shuffle_until_playable(&SimpleShuffle::default(), &mut grid, &mut rng, 50);
    assert!(report.attempts >= 1 && report.attempts <= 50);
    assert_eq!(report.playable, has_any_move(&grid, 3));
    assert_eq!(grid.sorted_values(), before);
}

#[test]
fn test_retry_limit_is_respected() {
    let mut grid = dead_board();
    let mut rng = SimpleRng::new(3);

    let report = shuffle_until_playable(&NeverPlayable, &mut grid, &mut rng, 5);
    assert_eq!(report.attempts, 5);
    assert!(!report.playable);
    assert_eq!(grid.sorted_values(), dead_board().sorted_values());
}
