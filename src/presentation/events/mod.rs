//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key classification helpers shared by every screen.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a hard quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key navigates back.
    #[must_use]
    pub fn is_back_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves focus forward.
    #[must_use]
    pub fn is_focus_next_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Tab | KeyCode::Down)
    }

    /// Checks if key moves focus backward.
    #[must_use]
    pub fn is_focus_previous_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::BackTab | KeyCode::Up)
    }

    /// Returns whether the key event should be handled at all.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        key.kind != KeyEventKind::Release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_typing_is_not_quit() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_back_event() {
        assert!(EventHandler::is_back_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_back_event(&make_key_event(
            KeyCode::Backspace,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_focus_events() {
        assert!(EventHandler::is_focus_next_event(&make_key_event(
            KeyCode::Tab,
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_focus_previous_event(&make_key_event(
            KeyCode::BackTab,
            KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_release_not_actionable() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!EventHandler::is_actionable(&release));
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
