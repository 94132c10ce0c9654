// Key translation
//
// The board state machine has its own Key type so it can be driven by
// tests and by any terminal backend. This module maps crossterm events
// onto it.

use crate::board::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a crossterm key event to a board key
///
/// Returns `None` for events that should not reach the board at all:
/// key releases, and Ctrl/Alt chords (Ctrl+C is handled by the event loop).
pub fn translate(event: &KeyEvent) -> Option<Key> {
    // Hold-to-repeat arrives as Repeat on terminals that report it
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    };
    Some(key)
}

/// Ctrl+C always quits, whatever mode the board or an overlay is in
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && event.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_maps_characters_and_arrows() {
        let press = |code| translate(&KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(press(KeyCode::Char('d')), Some(Key::Char('d')));
        assert_eq!(press(KeyCode::Left), Some(Key::Left));
        assert_eq!(press(KeyCode::Enter), Some(Key::Enter));
        assert_eq!(press(KeyCode::F(5)), Some(Key::Other));
    }

    #[test]
    fn test_shifted_letters_keep_their_case() {
        let shifted = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(translate(&shifted), Some(Key::Char('F')));
    }

    #[test]
    fn test_release_and_chords_are_dropped() {
        let release = event(KeyCode::Char('r'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(&release), None);

        let repeat = event(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(translate(&repeat), Some(Key::Down));

        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(&chord), None);
        assert!(is_interrupt(&chord));
    }
}
