//! Host-agnostic input event types.
//!
//! Every host maps its native key events to these enums. The session never
//! sees raw platform input.

/// A host-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A navigation / action key pressed.
    ButtonPress(Button),
    /// Character typed into the input field.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// The terminal surface was clicked or gained focus.
    FocusGained,
    /// User requested quit.
    Quit,
}

/// Keys with a fixed meaning in the input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Recall the previous history entry.
    Up,
    /// Recall the next history entry.
    Down,
    /// Move the edit cursor left.
    Left,
    /// Move the edit cursor right.
    Right,
    /// Submit the current line.
    Confirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_press_all_variants() {
        let buttons = [
            Button::Up,
            Button::Down,
            Button::Left,
            Button::Right,
            Button::Confirm,
        ];
        for btn in buttons {
            let e = InputEvent::ButtonPress(btn);
            assert_eq!(e, InputEvent::ButtonPress(btn));
        }
    }

    #[test]
    fn text_input_carries_char() {
        let e = InputEvent::TextInput('x');
        assert_eq!(e, InputEvent::TextInput('x'));
        assert_ne!(e, InputEvent::TextInput('y'));
    }

    #[test]
    fn backspace_differs_from_quit() {
        assert_ne!(InputEvent::Backspace, InputEvent::Quit);
    }
}
