//! Colors shared by screens and widgets.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// Resolved UI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and focus.
    pub accent: Color,
    /// Inline validation messages.
    pub error: Color,
    /// Hints and secondary text.
    pub muted: Color,
}

impl Theme {
    /// Builds theme from a configured accent color name or hex code.
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        let accent = Color::from_str(accent_color).unwrap_or_else(|_| {
            warn!(color = accent_color, "Unknown accent color, using default");
            Color::LightBlue
        });

        Self {
            accent,
            ..Self::default()
        }
    }

    /// Style for screen titles.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints.
    #[must_use]
    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for validation messages.
    #[must_use]
    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::LightBlue,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }
}
