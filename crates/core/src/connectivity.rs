//! Connectivity checks ("is there any move left?")
//!
//! A move is assumed to exist when some 4-connected region of one color holds
//! at least `min_length` chips. This is a region-size proxy, not a search for
//! a simple path, and it stays 4-directional even when paths may run
//! diagonally. Shuffle frequency depends on this exact rule.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::Coord;

/// Whether any same-color 4-connected region reaches `min_length` chips.
///
/// Each cell is visited at most once across the whole scan.
pub fn has_any_move(grid: &Grid, min_length: usize) -> bool {
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::new();

    for (start, chip) in grid.iter() {
        let start_idx = flat(grid, start);
        if visited[start_idx] || chip.is_empty() {
            continue;
        }

        let mut size = 0usize;
        visited[start_idx] = true;
        queue.clear();
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            size += 1;
            for n in grid.neighbors4(cur) {
                let idx = flat(grid, n);
                if visited[idx] || grid.get(n) != chip {
                    continue;
                }
                visited[idx] = true;
                queue.push_back(n);
            }
        }

        if size >= min_length {
            return true;
        }
    }
    false
}

/// The 4-connected same-color region containing `start`, in BFS order.
///
/// Empty for an empty or out-of-bounds cell.
pub fn region_at(grid: &Grid, start: Coord) -> Vec<Coord> {
    let Some(chip) = grid.checked_get(start) else {
        return Vec::new();
    };
    if chip.is_empty() {
        return Vec::new();
    }

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut region = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[flat(grid, start)] = true;

    while let Some(cur) = queue.pop_front() {
        region.push(cur);
        for n in grid.neighbors4(cur) {
            let idx = flat(grid, n);
            if !visited[idx] && grid.get(n) == chip {
                visited[idx] = true;
                queue.push_back(n);
            }
        }
    }
    region
}

#[inline]
fn flat(grid: &Grid, c: Coord) -> usize {
    c.row as usize * grid.cols() + c.col as usize
}
