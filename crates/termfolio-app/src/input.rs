//! crossterm key events to session input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::{Button, InputEvent};

/// Translate a key event. Returns `None` for keys the session has no use for
/// and for key releases / repeats reported by enhanced keyboards.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c' | 'd') if ctrl => InputEvent::Quit,
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Enter => InputEvent::ButtonPress(Button::Confirm),
        KeyCode::Up => InputEvent::ButtonPress(Button::Up),
        KeyCode::Down => InputEvent::ButtonPress(Button::Down),
        KeyCode::Left => InputEvent::ButtonPress(Button::Left),
        KeyCode::Right => InputEvent::ButtonPress(Button::Right),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Char(c) if !ctrl => InputEvent::TextInput(c),
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Enter)),
            Some(InputEvent::ButtonPress(Button::Confirm))
        );
        assert_eq!(
            map_key(&key(KeyCode::Up)),
            Some(InputEvent::ButtonPress(Button::Up))
        );
        assert_eq!(
            map_key(&key(KeyCode::Down)),
            Some(InputEvent::ButtonPress(Button::Down))
        );
        assert_eq!(map_key(&key(KeyCode::Backspace)), Some(InputEvent::Backspace));
    }

    #[test]
    fn printable_chars_are_text() {
        assert_eq!(
            map_key(&key(KeyCode::Char('x'))),
            Some(InputEvent::TextInput('x'))
        );
        let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(map_key(&shifted), Some(InputEvent::TextInput('X')));
    }

    #[test]
    fn quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(InputEvent::Quit));
    }

    #[test]
    fn other_ctrl_chords_are_dropped() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_a), None);
        assert_eq!(map_key(&key(KeyCode::F(5))), None);
    }

    #[test]
    fn releases_are_dropped() {
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(&release), None);
    }
}
