use crate::types::{ChipType, Coord, Outcome};

/// Read-only copy of everything a front-end draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, row 0 at the bottom.
    pub cells: Vec<ChipType>,
    /// The link being drawn, head first.
    pub path: Vec<Coord>,
    pub score: u32,
    pub moves_left: u32,
    pub target_score: u32,
    pub busy: bool,
    pub outcome: Option<Outcome>,
}

impl BoardSnapshot {
    pub fn cell(&self, c: Coord) -> ChipType {
        if c.row < 0 || c.col < 0 || c.row as usize >= self.rows || c.col as usize >= self.cols {
            return ChipType::Empty;
        }
        self.cells[c.row as usize * self.cols + c.col as usize]
    }

    pub fn in_path(&self, c: Coord) -> bool {
        self.path.contains(&c)
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn playable(&self) -> bool {
        !self.game_over() && !self.busy
    }
}
