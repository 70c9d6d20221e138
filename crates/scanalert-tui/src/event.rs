//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use scanalert_app::message::Message;
use scanalert_app::InputKey;
use scanalert_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with the given timeout.
///
/// Returns `Message::Tick` on timeout so toast expiry and the scan
/// spinner keep advancing without input.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        let event = event::read()?;

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
