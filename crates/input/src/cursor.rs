//! Keyboard-driven pointer.
//!
//! Arrow keys move a cursor over the grid; select toggles between pressed and
//! released. Moving while pressed drags, so a link can be drawn without a
//! mouse.

use crate::map::CursorMove;
use crate::types::Coord;

/// What the cursor asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press(Coord),
    Drag(Coord),
    Release,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardCursor {
    at: Coord,
    rows: i32,
    cols: i32,
    pressed: bool,
}

impl KeyboardCursor {
    /// Starts at the bottom-left cell, released.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            at: Coord::new(0, 0),
            rows: rows as i32,
            cols: cols as i32,
            pressed: false,
        }
    }

    pub fn position(&self) -> Coord {
        self.at
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Step one cell, clamped to the grid. Up is toward higher rows.
    pub fn step(&mut self, dir: CursorMove) -> Option<PointerAction> {
        let (dr, dc) = match dir {
            CursorMove::Up => (1, 0),
            CursorMove::Down => (-1, 0),
            CursorMove::Left => (0, -1),
            CursorMove::Right => (0, 1),
        };
        let next = Coord::new(
            (self.at.row + dr).clamp(0, self.rows - 1),
            (self.at.col + dc).clamp(0, self.cols - 1),
        );
        if next == self.at {
            return None;
        }
        self.at = next;
        self.pressed.then_some(PointerAction::Drag(next))
    }

    pub fn toggle(&mut self) -> PointerAction {
        self.pressed = !self.pressed;
        if self.pressed {
            PointerAction::Press(self.at)
        } else {
            PointerAction::Release
        }
    }

    /// Drop a held press, e.g. when the mouse takes over or on restart.
    pub fn cancel(&mut self) {
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_clamp_to_grid() {
        let mut c = KeyboardCursor::new(3, 3);
        assert_eq!(c.step(CursorMove::Down), None);
        assert_eq!(c.step(CursorMove::Left), None);
        c.step(CursorMove::Up);
        c.step(CursorMove::Up);
        c.step(CursorMove::Up);
        assert_eq!(c.position(), Coord::new(2, 0));
    }

    #[test]
    fn test_pressed_moves_become_drags() {
        let mut c = KeyboardCursor::new(4, 4);
        assert_eq!(c.toggle(), PointerAction::Press(Coord::new(0, 0)));
        assert_eq!(
            c.step(CursorMove::Right),
            Some(PointerAction::Drag(Coord::new(0, 1)))
        );
        assert_eq!(c.toggle(), PointerAction::Release);
        assert_eq!(c.step(CursorMove::Right), None);
        assert_eq!(c.position(), Coord::new(0, 2));
    }
}
