//! View boundary
//!
//! The engine never draws anything. It asks a [`BoardView`] to spawn, move,
//! scale and remove chip sprites, and keeps only the opaque [`ViewHandle`]s it
//! gets back, one per occupied cell, in a [`ViewGrid`]. Whether the view pools
//! sprites is its own business.

use crate::types::{ChipType, Coord, GridPoint, ViewHandle};

/// Sprite operations the engine needs from a renderer.
pub trait BoardView {
    /// Create a sprite for `chip` at `at` and return its handle.
    fn spawn(&mut self, chip: ChipType, at: GridPoint) -> ViewHandle;

    /// Remove a sprite. The handle is not used again by the engine.
    fn despawn(&mut self, handle: ViewHandle);

    /// Move a sprite.
    fn place(&mut self, handle: ViewHandle, at: GridPoint);

    fn set_scale(&mut self, handle: ViewHandle, scale: f32);

    /// Highlight (or un-highlight) a sprite that is part of the current link.
    fn set_selected(&mut self, handle: ViewHandle, selected: bool);
}

/// A view that draws nothing; handles are plain counters.
///
/// Handy for headless play, benchmarks and tests.
#[derive(Debug, Default, Clone)]
pub struct NullView {
    next: u64,
    live: usize,
}

impl NullView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites spawned and not yet despawned
    pub fn live(&self) -> usize {
        self.live
    }
}

impl BoardView for NullView {
    fn spawn(&mut self, _chip: ChipType, _at: GridPoint) -> ViewHandle {
        self.next += 1;
        self.live += 1;
        ViewHandle(self.next)
    }

    fn despawn(&mut self, _handle: ViewHandle) {
        self.live = self.live.saturating_sub(1);
    }

    fn place(&mut self, _handle: ViewHandle, _at: GridPoint) {}

    fn set_scale(&mut self, _handle: ViewHandle, _scale: f32) {}

    fn set_selected(&mut self, _handle: ViewHandle, _selected: bool) {}
}

/// Sprite handle per cell, same shape as the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewGrid {
    rows: usize,
    cols: usize,
    handles: Vec<Option<ViewHandle>>,
}

impl ViewGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            handles: vec![None; rows * cols],
        }
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        assert!(
            c.row >= 0 && (c.row as usize) < self.rows && c.col >= 0 && (c.col as usize) < self.cols,
            "coordinate ({}, {}) outside {}x{} view grid",
            c.row,
            c.col,
            self.rows,
            self.cols
        );
        c.row as usize * self.cols + c.col as usize
    }

    pub fn get(&self, c: Coord) -> Option<ViewHandle> {
        self.handles[self.index(c)]
    }

    pub fn set(&mut self, c: Coord, handle: Option<ViewHandle>) {
        let idx = self.index(c);
        self.handles[idx] = handle;
    }

    /// Remove and return the handle at `c`.
    pub fn take(&mut self, c: Coord) -> Option<ViewHandle> {
        let idx = self.index(c);
        self.handles[idx].take()
    }

    /// Every live handle, row-major.
    pub fn handles(&self) -> impl Iterator<Item = ViewHandle> + '_ {
        self.handles.iter().flatten().copied()
    }

    /// Remove every handle, returning them row-major.
    pub fn drain(&mut self) -> Vec<ViewHandle> {
        self.handles.iter_mut().filter_map(Option::take).collect()
    }

    pub fn occupied(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }
}
