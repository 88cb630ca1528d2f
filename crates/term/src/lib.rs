//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a
//! framebuffer of styled cells which is then diffed and flushed to the
//! terminal. No widget toolkit is involved.
//!
//! - [`sprites::SpriteBoard`] is the terminal's [`core::BoardView`]
//! - [`game_view::GameView`] draws a snapshot plus its sprites and maps
//!   terminal positions back to grid coordinates
//! - [`renderer::TerminalRenderer`] owns the terminal session

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use link_match_core as core;
pub use link_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{Sprite, SpriteBoard};
