use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;

const LOGO_TEXT: &str = "
  ___                 ___             _
 / __|__ _ _ _ ___   / __|__ _ _ _ __| |___
| (__/ _` | '_/ -_) | (__/ _` | '_/ _` (_-<
 \\___\\__,_|_| \\___|  \\___\\__,_|_| \\__,_/__/";

/// Result of a key on the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashAction {
    /// Keep waiting.
    None,
    /// Skip to login.
    GetStarted,
}

/// Welcome screen that hands over to the login form after a fixed delay.
///
/// The countdown lives in the screen itself, so dropping the screen cancels it.
pub struct SplashScreen {
    intro_effect: Option<Effect>,
    intro_finished: bool,
    remaining: Duration,
    pending_duration: Duration,
    theme: Theme,
}

impl SplashScreen {
    /// Creates splash that lasts `delay`.
    #[must_use]
    pub fn new(delay: Duration, animations: bool, theme: Theme) -> Self {
        let intro_effect = animations.then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            intro_finished: intro_effect.is_none(),
            intro_effect,
            remaining: delay,
            pending_duration: Duration::ZERO,
            theme,
        }
    }

    /// Advances the countdown and queues time for the intro animation.
    pub fn tick(&mut self, duration: Duration) {
        self.remaining = self.remaining.saturating_sub(duration);
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Returns whether the delay ran out.
    #[must_use]
    pub fn is_elapsed(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Returns time left on the countdown.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> SplashAction {
        if EventHandler::is_submit_event(&key) {
            SplashAction::GetStarted
        } else {
            SplashAction::None
        }
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(LOGO_TEXT.trim_matches('\n'))
            .style(self.theme.title())
            .centered();
        let logo_height = u16::try_from(text.lines.len()).unwrap_or(0);

        let [_, logo_area, _, tagline_area, _, button_area, countdown_area, _] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);

        Paragraph::new(text).render(logo_area, buf);

        Paragraph::new("Find a hospital. Show it some love.")
            .style(Style::default().fg(Color::Gray))
            .centered()
            .render(tagline_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "  Get Started  ",
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(button_area, buf);

        let secs = self.remaining.as_secs_f32().ceil();
        Paragraph::new(format!("Enter to continue, or wait {secs:.0}s"))
            .style(self.theme.hint())
            .centered()
            .render(countdown_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.intro_finished
            && let Some(effect) = self.intro_effect.as_mut()
        {
            let overflow = effect.process(duration.into(), buf, logo_area);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn splash(delay_secs: u64) -> SplashScreen {
        SplashScreen::new(Duration::from_secs(delay_secs), false, Theme::default())
    }

    #[test]
    fn test_countdown_elapses() {
        let mut screen = splash(5);
        screen.tick(Duration::from_secs(3));
        assert!(!screen.is_elapsed());
        assert_eq!(screen.remaining(), Duration::from_secs(2));

        screen.tick(Duration::from_secs(3));
        assert!(screen.is_elapsed());
    }

    #[test]
    fn test_zero_delay_is_elapsed_immediately() {
        assert!(splash(0).is_elapsed());
    }

    #[test]
    fn test_enter_gets_started() {
        let mut screen = splash(5);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(screen.handle_key(other), SplashAction::None);
        assert_eq!(screen.handle_key(enter), SplashAction::GetStarted);
    }

    #[test]
    fn test_render_shows_button() {
        let mut screen = splash(5);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        (&mut screen).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Get Started"));
    }
}
