//! Terminal link-match runner (default binary).
//!
//! Draw links with the mouse (press, drag, release) or with the keyboard
//! cursor (arrows to move, space to press and release). Uses crossterm for
//! input and the framebuffer renderer from `link_match::term`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;

use link_match::core::{BoardView, LevelConfig, LinkController};
use link_match::input::{map_event, InputEvent, KeyboardCursor, PointerAction};
use link_match::term::{FrameBuffer, GameView, SpriteBoard, TerminalRenderer, Viewport};
use link_match::types::{Adjacency, DEFAULT_SEED, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "link-match", version, about = "Link same-colored chips in the terminal")]
struct Args {
    /// Level file (JSON). Missing fields use the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed, used unless the level file sets one
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Moves available per game
    #[arg(long)]
    moves: Option<u32>,

    /// Score needed to win
    #[arg(long)]
    target: Option<u32>,

    /// Allow diagonal steps in a link
    #[arg(long)]
    diagonal: bool,
}

impl Args {
    fn level(&self) -> Result<LevelConfig> {
        let mut level = match &self.config {
            Some(path) => LevelConfig::load(path)
                .with_context(|| format!("loading level {}", path.display()))?,
            None => LevelConfig::default(),
        };
        if let Some(rows) = self.rows {
            level.rows = rows;
        }
        if let Some(cols) = self.cols {
            level.cols = cols;
        }
        if let Some(moves) = self.moves {
            level.initial_moves = moves;
        }
        if let Some(target) = self.target {
            level.target_score = target;
        }
        if self.diagonal {
            level.adjacency = Adjacency::Diagonal;
        }
        level.validate()?;
        Ok(level)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = args.level()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, level, args.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, level: LevelConfig, seed: u32) -> Result<()> {
    let mut sprites = SpriteBoard::new();
    let mut game = LinkController::new(level, seed, &mut sprites)?;
    let mut cursor = KeyboardCursor::new(game.config().rows, game.config().cols);
    let mut show_cursor = false;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = game.snapshot();
        let marker = show_cursor.then(|| cursor.position());
        view.render_into(&snap, &sprites, marker, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            match input {
                InputEvent::Quit => return Ok(()),
                InputEvent::Resize { .. } => term.invalidate(),
                InputEvent::Restart => {
                    cursor.cancel();
                    game.restart(&mut sprites, None);
                }
                InputEvent::PointerDown { x, y } => {
                    show_cursor = false;
                    // The mouse takes over a link held from the keyboard.
                    if cursor.is_pressed() {
                        cursor.cancel();
                        game.cancel(&mut sprites);
                    }
                    game.press(view.hit_test(&snap, viewport, x, y), &mut sprites);
                }
                InputEvent::PointerDrag { x, y } => {
                    game.drag(view.hit_test(&snap, viewport, x, y), &mut sprites);
                }
                InputEvent::PointerUp { .. } => {
                    game.release(&mut sprites);
                }
                InputEvent::Cursor(dir) => {
                    show_cursor = true;
                    if let Some(action) = cursor.step(dir) {
                        apply(&mut game, action, &mut sprites);
                    }
                }
                InputEvent::Select => {
                    show_cursor = true;
                    let action = cursor.toggle();
                    apply(&mut game, action, &mut sprites);
                    // A press the game refused leaves nothing to release.
                    if cursor.is_pressed() && game.path().is_empty() {
                        cursor.cancel();
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick(TICK_MS, &mut sprites);
        }
    }
}

fn apply(game: &mut LinkController, action: PointerAction, view: &mut dyn BoardView) {
    match action {
        PointerAction::Press(at) => game.press(Some(at), view),
        PointerAction::Drag(at) => game.drag(Some(at), view),
        PointerAction::Release => {
            game.release(view);
        }
    }
}

