//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data so it can be used by the engine, the terminal
//! front-end and level files alike.
//!
//! # Coordinates
//!
//! A [`Coord`] is `(row, col)`, zero-based. Row 0 is the **bottom** row and
//! rows grow upward; columns grow to the right. Chips fall toward row 0.
//!
//! # Level Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 8 | Grid height |
//! | `DEFAULT_COLS` | 8 | Grid width |
//! | `DEFAULT_INITIAL_MOVES` | 20 | Moves available at level start |
//! | `DEFAULT_TARGET_SCORE` | 100 | Score needed to win |
//! | `MIN_LINK_LENGTH` | 3 | Shortest path that clears on release |
//! | `SHUFFLE_RETRY_LIMIT` | 50 | Reshuffles attempted before giving up |
//!
//! # Animation Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `POP_MS` | 80 | Pop animation per removed chip |
//! | `FALL_MS` | 50 | Fall animation per moved or spawned chip |
//! | `PULSE_MS` | 120 | Each half of the post-shuffle pulse |
//!
//! # Examples
//!
//! ```
//! use link_match_types::{Adjacency, ChipType, Coord};
//!
//! let chip = ChipType::Blue;
//! assert_eq!(chip.as_str(), "blue");
//! assert!(!chip.is_empty());
//!
//! let a = Coord::new(2, 3);
//! let b = Coord::new(3, 4);
//! assert_eq!(Coord::manhattan(a, b), 2);
//! assert!(!Adjacency::Orthogonal.is_adjacent(a, b));
//! assert!(Adjacency::Diagonal.is_adjacent(a, b));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid height (8 rows)
pub const DEFAULT_ROWS: usize = 8;

/// Default grid width (8 columns)
pub const DEFAULT_COLS: usize = 8;

/// Default number of moves at level start
pub const DEFAULT_INITIAL_MOVES: u32 = 20;

/// Default score required to win a level
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Minimum path length that clears chips on release
pub const MIN_LINK_LENGTH: usize = 3;

/// Maximum reshuffles attempted when the board has no move
pub const SHUFFLE_RETRY_LIMIT: u32 = 50;

/// Seed used when neither the level nor the caller provides one
pub const DEFAULT_SEED: u32 = 12345;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pop animation duration for one removed chip
pub const POP_MS: u32 = 80;

/// Fall animation duration for one moved or spawned chip
pub const FALL_MS: u32 = 50;

/// Duration of each half (grow, shrink) of the shuffle pulse
pub const PULSE_MS: u32 = 120;

/// Scale reached at the end of a pop animation
pub const POP_SCALE: f32 = 1.15;

/// Peak scale of the shuffle pulse
pub const PULSE_SCALE: f32 = 1.05;

/// The chip palette
///
/// `Empty` marks a vacant cell; the four colors are the playable chips.
/// Two chips match when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipType {
    #[default]
    Empty,
    Yellow,
    Blue,
    Green,
    Red,
}

impl ChipType {
    /// All colored chips in declaration order.
    pub const COLORS: [ChipType; 4] = [
        ChipType::Yellow,
        ChipType::Blue,
        ChipType::Green,
        ChipType::Red,
    ];

    pub fn is_empty(&self) -> bool {
        matches!(self, ChipType::Empty)
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipType::Empty => "empty",
            ChipType::Yellow => "yellow",
            ChipType::Blue => "blue",
            ChipType::Green => "green",
            ChipType::Red => "red",
        }
    }
}

/// A grid coordinate `(row, col)`.
///
/// Rows grow upward and columns grow rightward. Coordinates are signed so
/// that neighbor arithmetic can step off the grid; bounds are checked by the
/// grid, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Sentinel for "no coordinate".
    pub const INVALID: Coord = Coord { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `|Δrow| + |Δcol|`
    pub fn manhattan(a: Coord, b: Coord) -> u32 {
        a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
    }

    /// `max(|Δrow|, |Δcol|)`
    pub fn chebyshev(a: Coord, b: Coord) -> u32 {
        a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Coord {
        Coord::new(self.row + d_row, self.col + d_col)
    }
}

/// Adjacency rule for extending a link path
///
/// - **Orthogonal**: up, down, left, right (`manhattan == 1`)
/// - **Diagonal**: the 8 surrounding cells (`chebyshev == 1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    #[default]
    Orthogonal,
    Diagonal,
}

impl Adjacency {
    /// Whether `b` is a legal next step from `a`. A cell is never adjacent
    /// to itself.
    pub fn is_adjacent(&self, a: Coord, b: Coord) -> bool {
        match self {
            Adjacency::Orthogonal => Coord::manhattan(a, b) == 1,
            Adjacency::Diagonal => Coord::chebyshev(a, b) == 1,
        }
    }
}

/// How a finished level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        }
    }
}

/// A fractional position in grid units.
///
/// Used only to tell the view where a sprite currently sits while it moves;
/// the engine never interprets it beyond interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub row: f32,
    pub col: f32,
}

impl GridPoint {
    pub const fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    /// Linear interpolation, `k` clamped to `[0, 1]`.
    pub fn lerp(self, to: GridPoint, k: f32) -> GridPoint {
        let k = k.clamp(0.0, 1.0);
        GridPoint {
            row: self.row + (to.row - self.row) * k,
            col: self.col + (to.col - self.col) * k,
        }
    }
}

impl From<Coord> for GridPoint {
    fn from(c: Coord) -> Self {
        GridPoint::new(c.row as f32, c.col as f32)
    }
}

/// Opaque handle to a chip sprite owned by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(pub u64);
