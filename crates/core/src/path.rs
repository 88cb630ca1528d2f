//! Link path validation
//!
//! The validator is a set of pure predicates over a caller-owned path. It does
//! not track the gesture and does not handle backtracking; the controller
//! decides whether a pointer step means "undo" or "extend" before asking
//! [`PathValidator::can_append`].

use crate::grid::Grid;
use crate::types::{Adjacency, ChipType, Coord, MIN_LINK_LENGTH};

/// Rules for starting, extending and completing a link.
pub trait PathValidator {
    /// Whether a gesture may begin on a chip of this type.
    fn can_start(&self, head: ChipType) -> bool;

    /// Whether `next` may be appended to `path`.
    fn can_append(&self, path: &[Coord], next: Coord, grid: &Grid) -> bool;

    /// Whether releasing with this path clears it.
    fn is_valid_on_release(&self, path: &[Coord]) -> bool;
}

/// Standard link rules: same color as the head, adjacent to the tail under
/// the configured [`Adjacency`], no revisits, at least `min_length` long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPathValidator {
    min_length: usize,
    adjacency: Adjacency,
}

impl LinkPathValidator {
    pub fn new(min_length: usize, adjacency: Adjacency) -> Self {
        Self {
            min_length,
            adjacency,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

impl Default for LinkPathValidator {
    fn default() -> Self {
        Self::new(MIN_LINK_LENGTH, Adjacency::Orthogonal)
    }
}

impl PathValidator for LinkPathValidator {
    fn can_start(&self, head: ChipType) -> bool {
        !head.is_empty()
    }

    fn can_append(&self, path: &[Coord], next: Coord, grid: &Grid) -> bool {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return false;
        };
        if !self.adjacency.is_adjacent(last, next) {
            return false;
        }
        match (grid.checked_get(next), grid.checked_get(first)) {
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
        !path.contains(&next)
    }

    fn is_valid_on_release(&self, path: &[Coord]) -> bool {
        path.len() >= self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ChipType::{Blue as B, Red as R};

    fn grid() -> Grid {
        // row 0 (bottom) first; a 2x2 red block in the lower left
        Grid::from_rows(&[
            vec![R, R, B],
            vec![R, R, B],
            vec![B, R, R],
        ])
        .unwrap()
    }

    #[test]
    fn test_cannot_start_on_empty() {
        let v = LinkPathValidator::default();
        assert!(!v.can_start(ChipType::Empty));
        assert!(v.can_start(ChipType::Yellow));
    }

    #[test]
    fn test_empty_path_rejects_everything() {
        let v = LinkPathValidator::default();
        assert!(!v.can_append(&[], Coord::new(0, 0), &grid()));
    }

    #[test]
    fn test_appends_same_color_orthogonal_neighbor() {
        let v = LinkPathValidator::default();
        let g = grid();
        assert!(v.can_append(&[Coord::new(0, 0)], Coord::new(0, 1), &g));
        assert!(v.can_append(&[Coord::new(0, 0)], Coord::new(1, 0), &g));
    }

    #[test]
    fn test_rejects_other_color() {
        let v = LinkPathValidator::default();
        assert!(!v.can_append(&[Coord::new(0, 1)], Coord::new(0, 2), &grid()));
    }

    #[test]
    fn test_color_is_compared_against_the_head() {
        let v = LinkPathValidator::default();
        let g = grid();
        let blue = [Coord::new(0, 2)];
        assert!(v.can_append(&blue, Coord::new(1, 2), &g));
        assert!(!v.can_append(&blue, Coord::new(0, 1), &g));
    }

    #[test]
    fn test_diagonal_needs_diagonal_mode() {
        let g = grid();
        let path = [Coord::new(1, 0)];
        let diag = Coord::new(2, 1);
        assert!(!LinkPathValidator::default().can_append(&path, diag, &g));
        assert!(LinkPathValidator::new(3, Adjacency::Diagonal).can_append(&path, diag, &g));
    }

    #[test]
    fn test_rejects_revisit() {
        let v = LinkPathValidator::default();
        let g = grid();
        // Around the red block: (0, 0) is a same-color neighbor of the tail
        // and not the previous cell, but it is already in the path.
        let path = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 0),
        ];
        assert!(!v.can_append(&path, Coord::new(0, 0), &g));
        assert!(!v.can_append(&path[..3], Coord::new(0, 1), &g));
        assert!(v.can_append(&path[..3], Coord::new(2, 1), &g));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let v = LinkPathValidator::default();
        assert!(!v.can_append(&[Coord::new(0, 0)], Coord::new(-1, 0), &grid()));
    }

    #[test]
    fn test_release_length_boundary() {
        let v = LinkPathValidator::new(3, Adjacency::Orthogonal);
        let two = [Coord::new(0, 0), Coord::new(0, 1)];
        let three = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
        assert!(!v.is_valid_on_release(&two));
        assert!(v.is_valid_on_release(&three));
    }
}
