//! Gravity fill - closes the gaps left by a cleared link
//!
//! For each column, left to right:
//!
//! 1. **Compaction**: scan rows bottom to top with a write cursor. Every chip
//!    found above the cursor drops to it (model and sprite handle), and the
//!    cursor advances past every chip.
//! 2. **Refill**: every row from the cursor to the top gets a fresh chip; the
//!    view spawns its sprite half a board above the target.
//!
//! The model is final when [`FillStrategy::fill`] returns. The returned
//! [`Motion`]s describe the sprite movement, in execution order, for the
//! animation timeline to play back.

use crate::grid::Grid;
use crate::types::{ChipType, Coord, GridPoint, ViewHandle};
use crate::view::{BoardView, ViewGrid};

/// One sprite movement produced by a fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub handle: ViewHandle,
    pub from: GridPoint,
    pub to: GridPoint,
    /// True for freshly spawned chips, false for chips dropped by compaction.
    pub spawned: bool,
}

/// Compacts and refills the grid after chips are removed.
pub trait FillStrategy {
    /// Fill every empty cell. `next_chip` supplies new chip types in the
    /// order they are needed.
    fn fill(
        &self,
        grid: &mut Grid,
        views: &mut ViewGrid,
        next_chip: &mut dyn FnMut() -> ChipType,
        view: &mut dyn BoardView,
    ) -> Vec<Motion>;
}

/// Column-by-column gravity with refill from above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityFill;

impl FillStrategy for GravityFill {
    fn fill(
        &self,
        grid: &mut Grid,
        views: &mut ViewGrid,
        next_chip: &mut dyn FnMut() -> ChipType,
        view: &mut dyn BoardView,
    ) -> Vec<Motion> {
        let rows = grid.rows();
        let spawn_lift = rows as f32 * 0.5;
        let mut motions = Vec::new();

        for col in 0..grid.cols() {
            let mut write = 0usize;

            for from in grid.column(col) {
                let chip = grid.get(from);
                if chip.is_empty() {
                    continue;
                }
                let to = Coord::new(write as i32, col as i32);
                if to != from {
                    grid.set(to, chip);
                    grid.set(from, ChipType::Empty);

                    let handle = views.take(from);
                    views.set(to, handle);
                    if let Some(handle) = handle {
                        motions.push(Motion {
                            handle,
                            from: from.into(),
                            to: to.into(),
                            spawned: false,
                        });
                    }
                }
                write += 1;
            }

            for row in write..rows {
                let at = Coord::new(row as i32, col as i32);
                let chip = next_chip();
                grid.set(at, chip);

                let target = GridPoint::from(at);
                let start = GridPoint::new(target.row + spawn_lift, target.col);
                let handle = view.spawn(chip, start);
                views.set(at, Some(handle));
                motions.push(Motion {
                    handle,
                    from: start,
                    to: target,
                    spawned: true,
                });
            }
        }

        motions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChipType::{Blue as B, Empty as E, Green as G, Red as R};
    use crate::view::NullView;

    fn handles_for(grid: &Grid, view: &mut NullView) -> ViewGrid {
        let mut views = ViewGrid::new(grid.rows(), grid.cols());
        for (c, chip) in grid.iter() {
            if !chip.is_empty() {
                views.set(c, Some(view.spawn(chip, c.into())));
            }
        }
        views
    }

    #[test]
    fn test_compacts_column_stably_then_refills() {
        // Column 0 bottom to top: R, E, B, E, G
        let mut grid = Grid::from_rows(&[vec![R], vec![E], vec![B], vec![E], vec![G]]).unwrap();
        let mut view = NullView::new();
        let mut views = handles_for(&grid, &mut view);
        let mut next = || ChipType::Yellow;

        let motions = GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);

        let column: Vec<ChipType> = grid.column(0).map(|c| grid.get(c)).collect();
        assert_eq!(column, vec![R, B, G, ChipType::Yellow, ChipType::Yellow]);
        // B drops 2 -> 1, G drops 4 -> 2, then two spawns.
        assert_eq!(motions.len(), 4);
        assert_eq!(motions[0].from, GridPoint::new(2.0, 0.0));
        assert_eq!(motions[0].to, GridPoint::new(1.0, 0.0));
        assert!(!motions[1].spawned);
        assert!(motions[2].spawned && motions[3].spawned);
        // Spawns start half a board (5 rows / 2) above their target.
        assert_eq!(motions[2].from, GridPoint::new(5.5, 0.0));
        assert_eq!(views.occupied(), 5);
    }

    #[test]
    fn test_full_grid_is_untouched() {
        let mut grid = Grid::from_rows(&[vec![R, B], vec![G, R]]).unwrap();
        let before = grid.clone();
        let mut view = NullView::new();
        let mut views = handles_for(&grid, &mut view);
        let mut next = || -> ChipType { panic!("no chip should be generated") };

        let motions = GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);
        assert!(motions.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_columns_processed_left_to_right() {
        let mut grid = Grid::from_rows(&[vec![E, E], vec![R, B]]).unwrap();
        let mut view = NullView::new();
        let mut views = handles_for(&grid, &mut view);
        let mut next = || G;

        let motions = GravityFill.fill(&mut grid, &mut views, &mut next, &mut view);
        let cols: Vec<f32> = motions.iter().map(|m| m.to.col).collect();
        assert_eq!(cols, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(grid.count(ChipType::Empty), 0);
    }
}
