//! Text input with an inline validation message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::TextInput;

/// Rows taken by one field: bordered input plus the message line.
pub const LABELED_INPUT_HEIGHT: u16 = 4;

/// Renders an input with its error message underneath.
pub struct LabeledInput<'a> {
    input: &'a TextInput,
    error: Option<&'a str>,
    error_style: Style,
}

impl<'a> LabeledInput<'a> {
    /// Wraps an input with an optional error.
    #[must_use]
    pub const fn new(input: &'a TextInput, error: Option<&'a str>) -> Self {
        Self {
            input,
            error,
            error_style: Style::new(),
        }
    }

    /// Sets error message style.
    #[must_use]
    pub const fn error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }
}

impl Widget for LabeledInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [input_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        self.input.render(input_area, buf);

        if let Some(message) = self.error {
            Paragraph::new(Line::styled(format!(" {message}"), self.error_style))
                .render(error_area, buf);
        }
    }
}
