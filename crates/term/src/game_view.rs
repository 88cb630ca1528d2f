//! GameView: draws a `core::BoardSnapshot` and its sprites into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each grid cell takes `cell_w x cell_h` terminal cells: the chip glyph
//! fills all but the last column and row, which stay free for the link line.
//! Row 0 is drawn at the bottom of the frame.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{Sprite, SpriteBoard};
use crate::types::{ChipType, Coord, Outcome};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left terminal cell of the top-left grid cell.
    pub origin_x: u16,
    pub origin_y: u16,
}

const BOARD_BG: Rgb = Rgb::new(28, 28, 36);
const SELECTED_BG: Rgb = Rgb::new(70, 70, 90);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LINK: CellStyle = CellStyle::new(Rgb::new(250, 250, 250), BOARD_BG).bold();

/// Terminal renderer for the link board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3-wide chips plus a gap column, 1-high chips plus a gap row.
        Self::new(4, 2)
    }
}

impl GameView {
    /// Cells smaller than 2x2 leave no room for the link line and are raised
    /// to 2.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
        }
    }

    pub fn layout(&self, rows: usize, cols: usize, viewport: Viewport) -> BoardLayout {
        // Border and one padding cell on each side; the gap after the last
        // chip doubles as the right/bottom padding.
        let frame_w = (cols as u16).saturating_mul(self.cell_w).saturating_add(3);
        let frame_h = (rows as u16).saturating_mul(self.cell_h).saturating_add(3);
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            origin_x: frame_x + 2,
            origin_y: frame_y + 2,
        }
    }

    /// Terminal position to grid coordinate. `None` off the board.
    ///
    /// The gap column and row after a chip belong to that chip, so every
    /// terminal cell inside the grid area maps to some coordinate.
    pub fn hit_test(&self, snap: &BoardSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        let l = self.layout(snap.rows, snap.cols, viewport);
        if x < l.origin_x || y < l.origin_y {
            return None;
        }
        let col = ((x - l.origin_x) / self.cell_w) as usize;
        let screen_row = ((y - l.origin_y) / self.cell_h) as usize;
        if col >= snap.cols || screen_row >= snap.rows {
            return None;
        }
        let row = snap.rows - 1 - screen_row;
        Some(Coord::new(row as i32, col as i32))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        sprites: &SpriteBoard,
        cursor: Option<Coord>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let l = self.layout(snap.rows, snap.cols, viewport);
        let bg = CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG);
        fb.fill_rect(l.frame_x + 1, l.frame_y + 1, l.frame_w - 2, l.frame_h - 2, ' ', bg);
        draw_border(fb, l.frame_x, l.frame_y, l.frame_w, l.frame_h, BORDER);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (x, y) = self.cell_origin(&l, snap.rows, row as f32, col as f32);
                fb.put_char(x + (self.cell_w - 1) / 2, y, '·', bg.dim());
            }
        }

        for (_, sprite) in sprites.iter() {
            self.draw_sprite(fb, &l, snap.rows, sprite);
        }
        self.draw_link(fb, &l, snap);

        if let Some(c) = cursor {
            if c.row >= 0 && c.col >= 0 && (c.row as usize) < snap.rows && (c.col as usize) < snap.cols {
                let (x, y) = self.cell_origin(&l, snap.rows, c.row as f32, c.col as f32);
                fb.put_char(x.saturating_sub(1), y, '▸', LINK);
            }
        }

        self.draw_hud(fb, snap, viewport, &l);
        if let Some(outcome) = snap.outcome {
            draw_end_panel(fb, &l, snap, outcome);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &BoardSnapshot,
        sprites: &SpriteBoard,
        cursor: Option<Coord>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, sprites, cursor, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell for a (possibly fractional) grid position.
    /// Positions above the top row clamp to it.
    fn cell_origin(&self, l: &BoardLayout, rows: usize, row: f32, col: f32) -> (u16, u16) {
        let down = ((rows as f32 - 1.0 - row) * self.cell_h as f32).round().max(0.0);
        let right = (col * self.cell_w as f32).round().max(0.0);
        (l.origin_x + right as u16, l.origin_y + down as u16)
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, l: &BoardLayout, rows: usize, sprite: &Sprite) {
        // Chips still falling in from above the board are not drawn yet.
        if sprite.at.row > rows as f32 - 0.5 {
            return;
        }
        let (x, y) = self.cell_origin(l, rows, sprite.at.row, sprite.at.col);
        let mut style = CellStyle::new(chip_color(sprite.chip).scaled(sprite.scale), BOARD_BG);
        if sprite.scale > 1.01 {
            style = style.bold();
        }
        let ch = if sprite.selected {
            style.bg = SELECTED_BG;
            '▓'
        } else {
            '█'
        };
        fb.fill_rect(x, y, self.cell_w - 1, self.cell_h - 1, ch, style);
    }

    fn draw_link(&self, fb: &mut FrameBuffer, l: &BoardLayout, snap: &BoardSnapshot) {
        for pair in snap.path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let low_col = a.col.min(b.col) as f32;
            let high_row = a.row.max(b.row) as f32;
            let (x, y) = self.cell_origin(l, snap.rows, high_row, low_col);
            let gap_x = x + self.cell_w - 1;
            let gap_y = y + self.cell_h - 1;

            match (b.row - a.row, b.col - a.col) {
                (0, _) => fb.put_char(gap_x, y, '─', LINK),
                (_, 0) => fb.put_char(x + (self.cell_w - 1) / 2, gap_y, '│', LINK),
                (dr, dc) if dr * dc > 0 => fb.put_char(gap_x, gap_y, '╱', LINK),
                _ => fb.put_char(gap_x, gap_y, '╲', LINK),
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, viewport: Viewport, l: &BoardLayout) {
        let x = l.frame_x.saturating_add(l.frame_w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }

        let mut y = l.frame_y;
        fb.put_str(x, y, "SCORE", LABEL);
        y += 1;
        fb.put_u32(x, y, snap.score, VALUE);
        y += 2;

        fb.put_str(x, y, "TARGET", LABEL);
        y += 1;
        fb.put_u32(x, y, snap.target_score, VALUE);
        y += 2;

        fb.put_str(x, y, "MOVES", LABEL);
        y += 1;
        fb.put_u32(x, y, snap.moves_left, VALUE);
        y += 2;

        let status = match (snap.outcome, snap.busy) {
            (Some(Outcome::Win), _) => "WON",
            (Some(Outcome::Lose), _) => "LOST",
            (None, true) => "BUSY",
            (None, false) => "READY",
        };
        fb.put_str(x, y, status, VALUE.dim());

        y += 2;
        if y < viewport.height {
            fb.put_str(x, y, "r restart  q quit", VALUE.dim());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
}

fn draw_end_panel(fb: &mut FrameBuffer, l: &BoardLayout, snap: &BoardSnapshot, outcome: Outcome) {
    let title = match outcome {
        Outcome::Win => "LEVEL CLEAR",
        Outcome::Lose => "OUT OF MOVES",
    };
    let w: u16 = 18;
    let h: u16 = 5;
    let x = l.frame_x + l.frame_w.saturating_sub(w) / 2;
    let y = l.frame_y + l.frame_h.saturating_sub(h) / 2;

    let panel = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
    fb.fill_rect(x, y, w, h, ' ', panel);
    draw_border(fb, x, y, w, h, BORDER);

    let title_x = x + w.saturating_sub(title.len() as u16) / 2;
    fb.put_str(title_x, y + 1, title, panel.bold());
    fb.put_str(x + 2, y + 2, "score", panel.dim());
    fb.put_u32(x + 8, y + 2, snap.score, panel);
    fb.put_str(x + 2, y + 3, "r to play again", panel.dim());
}

fn chip_color(chip: ChipType) -> Rgb {
    match chip {
        ChipType::Yellow => Rgb::new(240, 210, 60),
        ChipType::Blue => Rgb::new(70, 120, 230),
        ChipType::Green => Rgb::new(90, 210, 110),
        ChipType::Red => Rgb::new(220, 70, 70),
        ChipType::Empty => Rgb::new(60, 60, 70),
    }
}
