//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Outcome of feeding a key to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// The value changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// The key was not an editing key.
    Ignored,
}

/// Text input field widget.
///
/// The cursor is a character index, so multi-byte input is safe.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    masked: bool,
    placeholder: String,
    label: String,
    accent: Color,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            placeholder: String::new(),
            label: label.into(),
            accent: Color::Cyan,
        }
    }

    /// Enables password masking.
    #[must_use]
    pub fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the focused border color.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Applies an editing key.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> InputChange {
        use crossterm::event::{KeyCode, KeyModifiers};

        // AltGr arrives as CONTROL | ALT on some platforms and still types a char.
        let chord = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        let is_shortcut = chord == KeyModifiers::CONTROL || chord == KeyModifiers::ALT;

        match key.code {
            KeyCode::Char(c) if !is_shortcut => {
                self.input_char(c);
                InputChange::Edited
            }
            KeyCode::Backspace if self.backspace() => InputChange::Edited,
            KeyCode::Delete if self.delete() => InputChange::Edited,
            KeyCode::Left => {
                self.move_left();
                InputChange::Moved
            }
            KeyCode::Right => {
                self.move_right();
                InputChange::Moved
            }
            KeyCode::Home => {
                self.move_start();
                InputChange::Moved
            }
            KeyCode::End => {
                self.move_end();
                InputChange::Moved
            }
            _ => InputChange::Ignored,
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.char_len())
        } else {
            self.value.clone()
        }
    }

    fn cursor_offset(&self) -> usize {
        if self.masked {
            self.cursor
        } else {
            let end = self.byte_index(self.cursor);
            self.value[..end].width()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let display = self.display_text();
        let paragraph = Paragraph::new(display).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            let offset = u16::try_from(self.cursor_offset()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Name");
        input.set_value("Zoë");
        input.move_left();
        input.input_char('x');
        assert_eq!(input.value(), "Zoxë");

        input.move_end();
        assert!(input.backspace());
        assert_eq!(input.value(), "Zox");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new("Password").password();
        input.set_value("secret");

        assert_eq!(input.display_text(), "••••••");
    }

    #[test]
    fn test_handle_key_reports_changes() {
        let mut input = TextInput::new("Email");

        assert_eq!(input.handle_key(key(KeyCode::Char('a'))), InputChange::Edited);
        assert_eq!(input.handle_key(key(KeyCode::Left)), InputChange::Moved);
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputChange::Ignored);
        assert_eq!(input.handle_key(key(KeyCode::Delete)), InputChange::Edited);
        assert_eq!(input.handle_key(key(KeyCode::F(2))), InputChange::Ignored);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let mut input = TextInput::new("Name");
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(input.handle_key(ctrl_r), InputChange::Ignored);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_altgr_chars_inserted() {
        let mut input = TextInput::new("Email");
        input.set_value("ann");
        let alt_gr_at = KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );

        assert_eq!(input.handle_key(alt_gr_at), InputChange::Edited);
        assert_eq!(input.value(), "ann@");

        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(input.handle_key(alt_x), InputChange::Ignored);
        assert_eq!(input.value(), "ann@");
    }
}
