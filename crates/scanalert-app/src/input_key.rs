//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so this
//! crate never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_input_key_clone() {
        let key = InputKey::Char('x');
        let cloned = key.clone();
        assert_eq!(key, cloned);
    }
}
