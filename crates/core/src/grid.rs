//! Grid module - the chip model
//!
//! The grid is a `rows x cols` array of [`ChipType`] stored row-major in a flat
//! vector. Row 0 is the bottom row; gravity pulls chips toward it.
//!
//! [`Grid::get`] and [`Grid::set`] treat out-of-bounds coordinates as an
//! orchestration bug and panic. Input-facing code filters with
//! [`Grid::in_bounds`] or uses [`Grid::checked_get`].

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::rng::{ChipPicker, RandomSource};
use crate::types::{Adjacency, ChipType, Coord};

/// Orthogonal steps in neighbor order: up, down, left, right.
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal steps, appended after the orthogonal ones for 8-way queries.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The chip grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<ChipType>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![ChipType::Empty; rows * cols],
        }
    }

    /// Build a grid from rows listed bottom row first (`rows[0]` is row 0).
    pub fn from_rows(rows: &[Vec<ChipType>]) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate flat index, `None` when out of bounds
    #[inline(always)]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn index_or_panic(&self, c: Coord) -> usize {
        match self.index(c) {
            Some(idx) => idx,
            None => panic!(
                "coordinate ({}, {}) outside {}x{} grid",
                c.row, c.col, self.rows, self.cols
            ),
        }
    }

    /// Whether `0 <= row < rows && 0 <= col < cols`
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && (c.row as usize) < self.rows && c.col >= 0 && (c.col as usize) < self.cols
    }

    /// Chip at `c`. Panics when out of bounds.
    pub fn get(&self, c: Coord) -> ChipType {
        self.cells[self.index_or_panic(c)]
    }

    /// Chip at `c`, or `None` when out of bounds
    pub fn checked_get(&self, c: Coord) -> Option<ChipType> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Store `chip` at `c`. Panics when out of bounds.
    pub fn set(&mut self, c: Coord, chip: ChipType) {
        let idx = self.index_or_panic(c);
        self.cells[idx] = chip;
    }

    /// In-bounds orthogonal neighbors, in the order up, down, left, right.
    pub fn neighbors4(&self, c: Coord) -> impl Iterator<Item = Coord> {
        self.neighbors(c, Adjacency::Orthogonal)
    }

    /// In-bounds neighbors under `adjacency`. Orthogonal neighbors always
    /// come first, in the same order as [`Grid::neighbors4`].
    pub fn neighbors(&self, c: Coord, adjacency: Adjacency) -> impl Iterator<Item = Coord> {
        let mut out: ArrayVec<Coord, 8> = ArrayVec::new();
        let diagonal: &[(i32, i32)] = match adjacency {
            Adjacency::Orthogonal => &[],
            Adjacency::Diagonal => &DIAGONAL,
        };
        for &(dr, dc) in ORTHOGONAL.iter().chain(diagonal) {
            let n = c.offset(dr, dc);
            if self.in_bounds(n) {
                out.push(n);
            }
        }
        out.into_iter()
    }

    /// All cells with their coordinates, row-major from row 0.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, ChipType)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, chip)| {
            (Coord::new((i / cols) as i32, (i % cols) as i32), *chip)
        })
    }

    /// All coordinates of one column, bottom to top.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Coord> {
        (0..self.rows).map(move |row| Coord::new(row as i32, col as i32))
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[ChipType] {
        &self.cells
    }

    /// Mutable flat view, used by strategies that permute whole boards.
    pub fn cells_mut(&mut self) -> &mut [ChipType] {
        &mut self.cells
    }

    /// Number of cells holding `chip`
    pub fn count(&self, chip: ChipType) -> usize {
        self.cells.iter().filter(|c| **c == chip).count()
    }

    /// Cell values sorted; two grids with equal results hold the same multiset.
    pub fn sorted_values(&self) -> Vec<ChipType> {
        let mut values = self.cells.clone();
        values.sort();
        values
    }

    /// Overwrite every cell with a random chip from `picker`, row-major.
    pub fn fill_random(&mut self, picker: &ChipPicker, rng: &mut dyn RandomSource) {
        for cell in &mut self.cells {
            *cell = picker.pick(rng);
        }
    }

    /// Set every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(ChipType::Empty);
    }
}
