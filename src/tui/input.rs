// Key mapping for the search widget
//
// Turns raw crossterm key events into the handful of actions the widget
// understands. Every action that changes the search box text is an "input
// event" and feeds the debouncer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a character to the search box
    Insert(char),
    /// Delete the last character
    Backspace,
    /// Empty the search box (Ctrl+U)
    ClearLine,
    /// Copy the visible region's HTML markup (Ctrl+Y)
    CopyMarkup,
    Quit,
    Ignore,
}

/// Map a key event to an action
///
/// Release events are ignored so terminals that report them (Windows) don't
/// type every character twice.
pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') if ctrl => InputAction::Quit,
        KeyCode::Char('u') if ctrl => InputAction::ClearLine,
        KeyCode::Char('y') if ctrl => InputAction::CopyMarkup,
        KeyCode::Char(_) if ctrl => InputAction::Ignore,
        KeyCode::Char(c) => InputAction::Insert(c),
        KeyCode::Backspace | KeyCode::Delete => InputAction::Backspace,
        _ => InputAction::Ignore,
    }
}
