//! Key hint footer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

struct FooterBarStyle {
    key_style: Style,
    label_style: Style,
    separator: Style,
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            key_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::DarkGray),
            separator: Style::default().fg(Color::DarkGray),
        }
    }
}

/// One line of `key label` hints.
pub struct FooterBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates footer from `(key, label)` pairs.
    #[must_use]
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            style: FooterBarStyle::default(),
        }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.style.separator));
            }
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
            spans.push(Span::styled(format!(" {label}"), self.style.label_style));
        }

        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }
}
