//! Shuffle strategies
//!
//! When the board has no move left, the controller permutes all chip values
//! in place and retries up to a fixed bound. Running out of retries is not an
//! error: play continues on the last shuffled board.

use tracing::{debug, warn};

use crate::connectivity;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::MIN_LINK_LENGTH;

/// Detects dead boards and reshuffles them.
pub trait ShuffleStrategy {
    /// Whether the board still offers a move.
    fn has_any_move(&self, grid: &Grid) -> bool;

    /// Permute the board's chip values in place.
    fn shuffle(&self, grid: &mut Grid, rng: &mut dyn RandomSource);
}

/// Uniform Fisher-Yates shuffle over every cell, with the region-size move
/// check from [`connectivity::has_any_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleShuffle {
    min_length: usize,
}

impl SimpleShuffle {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for SimpleShuffle {
    fn default() -> Self {
        Self::new(MIN_LINK_LENGTH)
    }
}

impl ShuffleStrategy for SimpleShuffle {
    fn has_any_move(&self, grid: &Grid) -> bool {
        connectivity::has_any_move(grid, self.min_length)
    }

    fn shuffle(&self, grid: &mut Grid, rng: &mut dyn RandomSource) {
        // Cells are stored row-major already, so permuting the flat slice is
        // the same as collect / permute / write back in row-major order.
        let cells = grid.cells_mut();
        for i in (1..cells.len()).rev() {
            let j = rng.next_range((i + 1) as u32) as usize;
            cells.swap(i, j);
        }
    }
}

/// Result of [`shuffle_until_playable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleReport {
    /// Shuffles performed; 0 when the board was already playable.
    pub attempts: u32,
    /// Whether the board ended with a move available.
    pub playable: bool,
}

impl ShuffleReport {
    pub fn shuffled(&self) -> bool {
        self.attempts > 0
    }
}

/// Shuffle until `strategy` finds a move or `retry_limit` shuffles have run.
pub fn shuffle_until_playable(
    strategy: &dyn ShuffleStrategy,
    grid: &mut Grid,
    rng: &mut dyn RandomSource,
    retry_limit: u32,
) -> ShuffleReport {
    if strategy.has_any_move(grid) {
        return ShuffleReport {
            attempts: 0,
            playable: true,
        };
    }

    let mut attempts = 0;
    while attempts < retry_limit {
        strategy.shuffle(grid, rng);
        attempts += 1;
        if strategy.has_any_move(grid) {
            debug!(attempts, "board reshuffled");
            return ShuffleReport {
                attempts,
                playable: true,
            };
        }
    }

    warn!(attempts, "no playable shuffle found, keeping last arrangement");
    ShuffleReport {
        attempts,
        playable: false,
    }
}
