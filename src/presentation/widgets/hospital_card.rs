//! Hospital card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::entities::Hospital;

/// Rows taken by one card.
pub const CARD_HEIGHT: u16 = 5;

/// Card styling.
pub struct HospitalCardStyle {
    /// Unselected border.
    pub border: Style,
    /// Selected border.
    pub selected_border: Style,
    /// Hospital name.
    pub name: Style,
    /// Location, phone and specialty.
    pub detail: Style,
    /// React label with reactions.
    pub reacted: Style,
    /// React label without reactions.
    pub not_reacted: Style,
}

impl HospitalCardStyle {
    /// Builds style around an accent color.
    #[must_use]
    pub fn with_accent(accent: Color) -> Self {
        Self {
            selected_border: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            name: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HospitalCardStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            selected_border: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            name: Style::default().add_modifier(Modifier::BOLD),
            detail: Style::default().fg(Color::Gray),
            reacted: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            not_reacted: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A single hospital card.
pub struct HospitalCard<'a> {
    hospital: &'a Hospital,
    selected: bool,
    style: &'a HospitalCardStyle,
}

impl<'a> HospitalCard<'a> {
    /// Creates card for a hospital.
    #[must_use]
    pub const fn new(hospital: &'a Hospital, style: &'a HospitalCardStyle) -> Self {
        Self {
            hospital,
            selected: false,
            style,
        }
    }

    /// Highlights the card.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn react_label(&self) -> Span<'static> {
        let count = self.hospital.reacts();
        if self.hospital.is_reacted() {
            Span::styled(format!("♥ {count}"), self.style.reacted)
        } else {
            Span::styled("♡ React".to_string(), self.style.not_reacted)
        }
    }
}

impl Widget for HospitalCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.style.selected_border
        } else {
            self.style.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(Span::styled(
                format!(" {} ", self.hospital.name()),
                self.style.name,
            )))
            .title_bottom(Line::from(self.react_label()).right_aligned());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(3);
        if let Some(specialty) = self.hospital.specialty() {
            lines.push(Line::from(Span::styled(
                specialty.to_string(),
                self.style.detail.add_modifier(Modifier::ITALIC),
            )));
        }
        if !self.hospital.location().is_empty() {
            lines.push(Line::from(Span::styled(
                self.hospital.location().to_string(),
                self.style.detail,
            )));
        }
        if let Some(phone) = self.hospital.phone() {
            lines.push(Line::from(Span::styled(
                format!("☎ {phone}"),
                self.style.detail,
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
