//! Gravity fill tests

use link_match::core::{BoardView, FillStrategy, GravityFill, Grid, NullView, ViewGrid};
use link_match::types::ChipType::{self, Blue as B, Empty as E, Green as G, Red as R, Yellow as Y};
use link_match::types::Coord;

fn spawn_views(grid: &Grid, view: &mut NullView) -> ViewGrid {
    let mut views = ViewGrid::new(grid.rows(), grid.cols());
    for (c, chip) in grid.iter() {
        if !chip.is_empty() {
            views.set(c, Some(view.spawn(chip, c.into())));
        }
    }
    views
}

fn column(grid: &Grid, col: usize) -> Vec<ChipType> {
    grid.column(col).map(|c| grid.get(c)).collect()
}

#[test]
fn test_fill_keeps_relative_order_and_leaves_no_gaps() {
    // Columns bottom to top:
    //   0: R E B E
    //   1: E E E G
    //   2: B G R Y
    let mut grid = Grid::from_rows(&[
        vec![R, E, B],
        vec![E, E, G],
        vec![B, E, R],
        vec![E, G, Y],
    ])
    .unwrap();
    let mut view = NullView::new();
    let mut views = spawn_views(&grid, &mut view);
    let mut next = || Y;

    GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);

    assert_eq!(column(&grid, 0), vec![R, B, Y, Y]);
    assert_eq!(column(&grid, 1), vec![G, Y, Y, Y]);
    assert_eq!(column(&grid, 2), vec![B, G, R, Y]);
    assert_eq!(grid.count(ChipType::Empty), 0);
    assert_eq!(views.occupied(), 12);
}

#[test]
fn test_fill_handles_follow_their_chips() {
    let mut grid = Grid::from_rows(&[vec![E, R], vec![B, R], vec![E, R]]).unwrap();
    let mut view = NullView::new();
    let mut views = spawn_views(&grid, &mut view);
    let blue = views.get(Coord::new(1, 0));
    let mut next = || G;

    let motions = GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);

    assert_eq!(views.get(Coord::new(0, 0)), blue);
    assert_eq!(motions[0].handle, blue.unwrap());
    assert!(!motions[0].spawned);
    assert_eq!(motions.iter().filter(|m| m.spawned).count(), 2);
    assert_eq!(view.live(), 6);
}

#[test]
fn test_fill_draws_chips_in_column_order() {
    let mut grid = Grid::from_rows(&[vec![E, E], vec![E, E]]).unwrap();
    let mut view = NullView::new();
    let mut views = ViewGrid::new(2, 2);
    let mut sequence = [R, B, G, Y].into_iter();
    let mut next = || sequence.next().unwrap_or(ChipType::Red);

    GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);

    assert_eq!(column(&grid, 0), vec![R, B]);
    assert_eq!(column(&grid, 1), vec![G, Y]);
}
