//! Player name entry for the leaderboard.
//!
//! Accepts ASCII letters and digits up to [`NAME_MAX_LEN`]; everything else
//! is ignored.

use arrayvec::ArrayString;
use crossterm::event::{KeyCode, KeyEvent};

use crate::types::NAME_MAX_LEN;

/// Result of feeding one key to a [`NameEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntryEvent {
    /// The buffer changed
    Edited,
    /// Enter was pressed on a non-empty name
    Submit(String),
    /// Key had no effect
    Ignored,
}

/// Bounded name buffer
#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    buf: ArrayString<NAME_MAX_LEN>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append `ch` if it is alphanumeric and there is room
    pub fn push(&mut self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() && self.buf.try_push(ch).is_ok()
    }

    pub fn pop(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEntryEvent {
        match key.code {
            KeyCode::Enter => {
                let name = self.buf.trim();
                if name.is_empty() {
                    NameEntryEvent::Ignored
                } else {
                    NameEntryEvent::Submit(name.to_string())
                }
            }
            KeyCode::Backspace if self.pop() => NameEntryEvent::Edited,
            KeyCode::Char(ch) if self.push(ch) => NameEntryEvent::Edited,
            _ => NameEntryEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(entry: &mut NameEntry, s: &str) {
        for ch in s.chars() {
            entry.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_caps_at_six_characters() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "abcdefgh");
        assert_eq!(entry.as_str(), "abcdef");
        assert!(entry.is_full());
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Char('z'))),
            NameEntryEvent::Ignored
        );
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "a b-c!9é");
        assert_eq!(entry.as_str(), "abc9");
    }

    #[test]
    fn test_backspace() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "ab");
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Backspace)),
            NameEntryEvent::Edited
        );
        assert_eq!(entry.as_str(), "a");
        entry.pop();
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Backspace)),
            NameEntryEvent::Ignored
        );
    }

    #[test]
    fn test_enter_requires_a_name() {
        let mut entry = NameEntry::new();
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            NameEntryEvent::Ignored
        );
        type_str(&mut entry, "Ann42");
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            NameEntryEvent::Submit("Ann42".to_string())
        );
    }

    #[test]
    fn test_clear() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "zed");
        entry.clear();
        assert!(entry.is_empty());
    }
}
