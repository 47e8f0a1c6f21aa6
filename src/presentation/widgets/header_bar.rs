//! Greeting header for the hospital list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Header showing who is logged in and the global reaction count.
pub struct HeaderBar<'a> {
    username: Option<&'a str>,
    total_reacts: u64,
    background: Color,
}

impl<'a> HeaderBar<'a> {
    /// Creates header. `None` greets anonymously.
    #[must_use]
    pub const fn new(username: Option<&'a str>, total_reacts: u64) -> Self {
        Self {
            username,
            total_reacts,
            background: Color::LightBlue,
        }
    }

    /// Sets background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    fn greeting(&self) -> String {
        match self.username {
            Some(name) => format!("Hi, {name}"),
            None => "Hi there".to_string(),
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.background)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let block = Block::default().style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inner);
        let y_offset = inner.height.saturating_sub(1) / 2;
        let left = Rect { y: left.y + y_offset, height: 1, ..left };
        let right = Rect { y: right.y + y_offset, height: 1, ..right };

        Paragraph::new(Line::from(format!(" {}", self.greeting())))
            .style(style)
            .render(left, buf);
        Paragraph::new(Line::from(format!("Total Reacts: {} ", self.total_reacts)))
            .style(style)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bar: HeaderBar<'_>) -> String {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_greets_username() {
        let text = render(HeaderBar::new(Some("ada"), 3));
        assert!(text.contains("Hi, ada"));
        assert!(text.contains("Total Reacts: 3"));
    }

    #[test]
    fn test_greets_without_username() {
        assert!(render(HeaderBar::new(None, 0)).contains("Hi there"));
    }
}
