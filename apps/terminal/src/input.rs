//! Terminal key events to engine events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use review_core::{Event, Key};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Engine(Event),
    /// Resend a rating that failed to save.
    Retry,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Command::Quit,
            KeyCode::Char('r') => Command::Retry,
            _ => Command::Engine(Event::Key(Key::Other)),
        };
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Tab => Command::Engine(Event::ShowAnswer),
        KeyCode::Enter => Command::Engine(Event::Key(Key::Enter)),
        KeyCode::Backspace => Command::Engine(Event::Key(Key::Backspace)),
        KeyCode::Char(c) => Command::Engine(Event::Key(Key::Char(c))),
        _ => Command::Engine(Event::Key(Key::Other)),
    }
}
