//! Terminal input module.
//!
//! Maps `crossterm` events into [`map::InputEvent`]s and provides a keyboard
//! cursor for playing without a mouse. Pointer positions stay in terminal
//! cells; turning them into grid coordinates is the view's job.

pub mod cursor;
pub mod map;

pub use link_match_types as types;

pub use cursor::{KeyboardCursor, PointerAction};
pub use map::{map_event, map_key, map_mouse, should_quit, CursorMove, InputEvent};
