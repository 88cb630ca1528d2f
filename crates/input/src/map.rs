//! Mapping from terminal events to game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Cursor step for keyboard play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Input the game loop understands. Pointer positions are terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { x: u16, y: u16 },
    PointerDrag { x: u16, y: u16 },
    PointerUp { x: u16, y: u16 },
    Cursor(CursorMove),
    /// Press or release at the keyboard cursor.
    Select,
    Restart,
    Quit,
    Resize { width: u16, height: u16 },
}

pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Only presses count; repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    let event = match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => InputEvent::Cursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            InputEvent::Cursor(CursorMove::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            InputEvent::Cursor(CursorMove::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            InputEvent::Cursor(CursorMove::Right)
        }
        KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Select,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
        _ => return None,
    };
    Some(event)
}

/// Left button only. Drags with the button up are plain moves and ignored.
pub fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::PointerDrag { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp { x, y }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Cursor(CursorMove::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(InputEvent::Cursor(CursorMove::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputEvent::Cursor(CursorMove::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::Select)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(InputEvent::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_left_button_gesture() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(InputEvent::PointerDown { x: 3, y: 4 })
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4)),
            Some(InputEvent::PointerDrag { x: 5, y: 4 })
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4)),
            Some(InputEvent::PointerUp { x: 5, y: 4 })
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            map_event(&Event::Resize(80, 24)),
            Some(InputEvent::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
