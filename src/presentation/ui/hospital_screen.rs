//! Hospital list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::application::HospitalContext;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CARD_HEIGHT, FooterBar, HeaderBar, HospitalCard, HospitalCardStyle, TextInput,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HospitalFocus {
    /// Search box.
    Search,
    /// Hospital cards.
    #[default]
    List,
}

/// Result of a key on the hospital screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalAction {
    /// Nothing for the app to do.
    None,
    /// React to the hospital at this position.
    React(usize),
}

/// Per-visit state of the hospital list screen.
///
/// The hospitals themselves live in [`HospitalContext`]; this only tracks
/// the greeting, the search text, focus and scrolling.
pub struct HospitalScreenState {
    username: Option<String>,
    search: TextInput,
    focus: HospitalFocus,
    selected: usize,
    offset: usize,
    spinner_frame: usize,
}

impl HospitalScreenState {
    /// Creates state with the list focused.
    #[must_use]
    pub fn new(username: Option<String>, theme: &Theme) -> Self {
        let search = TextInput::new(" Search ")
            .placeholder("Hospital Details")
            .accent(theme.accent);

        Self {
            username,
            search,
            focus: HospitalFocus::List,
            selected: 0,
            offset: 0,
            spinner_frame: 0,
        }
    }

    /// Returns greeted username.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the captured search text. It is not applied to the list.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search.value()
    }

    /// Returns focused area.
    #[must_use]
    pub const fn focus(&self) -> HospitalFocus {
        self.focus
    }

    /// Returns selected card index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Advances the loading spinner.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Handles key event against a list of `count` hospitals.
    pub fn handle_key(&mut self, key: KeyEvent, count: usize) -> HospitalAction {
        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.toggle_focus();
            return HospitalAction::None;
        }

        match self.focus {
            HospitalFocus::Search => {
                if key.code == KeyCode::Down || EventHandler::is_submit_event(&key) {
                    self.toggle_focus();
                } else {
                    self.search.handle_key(key);
                }
                HospitalAction::None
            }
            HospitalFocus::List => self.handle_list_key(key, count),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, count: usize) -> HospitalAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.selected = count.saturating_sub(1),
            KeyCode::Char('/') => self.toggle_focus(),
            KeyCode::Enter | KeyCode::Char(' ' | 'r') if self.selected < count => {
                return HospitalAction::React(self.selected);
            }
            _ => {}
        }
        HospitalAction::None
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            HospitalFocus::Search => HospitalFocus::List,
            HospitalFocus::List => HospitalFocus::Search,
        };
        self.search.set_focused(self.focus == HospitalFocus::Search);
    }

    fn clamp(&mut self, count: usize, visible: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if visible > 0 && self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

/// Renders a [`HospitalContext`] snapshot.
pub struct HospitalScreen<'a> {
    context: &'a HospitalContext,
    theme: &'a Theme,
}

impl<'a> HospitalScreen<'a> {
    /// Creates screen over a context snapshot.
    #[must_use]
    pub const fn new(context: &'a HospitalContext, theme: &'a Theme) -> Self {
        Self { context, theme }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer, state: &HospitalScreenState) {
        let [_, line, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                SPINNER_FRAMES[state.spinner_frame],
                Style::default().fg(self.theme.accent),
            ),
            Span::raw(" Loading hospitals..."),
        ]))
        .centered()
        .render(line, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, state: &mut HospitalScreenState) {
        let hospitals = self.context.hospitals();

        if hospitals.is_empty() {
            let message = self.context.load_error().map_or_else(
                || Line::styled("No hospitals to show", self.theme.hint()),
                |e| Line::styled(format!("Could not load hospitals: {e}"), self.theme.error_text()),
            );
            Paragraph::new(message).centered().render(area, buf);
            return;
        }

        let visible = usize::from(area.height / CARD_HEIGHT).max(1);
        state.clamp(hospitals.len(), visible);

        let style = HospitalCardStyle::with_accent(self.theme.accent);
        let list_focused = state.focus == HospitalFocus::List;

        let mut y = area.y;
        for (index, hospital) in hospitals.iter().enumerate().skip(state.offset).take(visible) {
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, height);
            HospitalCard::new(hospital, &style)
                .selected(list_focused && index == state.selected)
                .render(card_area, buf);
            y += height;
        }
    }
}

impl StatefulWidget for HospitalScreen<'_> {
    type State = HospitalScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.context.is_loading() {
            self.render_loading(area, buf, state);
            return;
        }

        let [header, _, search, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(state.username(), self.context.total_reacts())
            .background(self.theme.accent)
            .render(header, buf);

        (&state.search).render(search, buf);

        self.render_list(list, buf, state);

        let hints: &[(&str, &str)] = match state.focus {
            HospitalFocus::List => &[
                ("↑↓", "Select"),
                ("Enter", "React"),
                ("Tab", "Search"),
                ("Esc", "Back"),
            ],
            HospitalFocus::Search => &[("Tab", "List"), ("Esc", "Back")],
        };
        FooterBar::new(hints).render(footer, buf);

        if state.focus == HospitalFocus::List && !self.context.hospitals().is_empty() {
            let position = format!(
                " {}/{} ",
                state.selected + 1,
                self.context.hospitals().len()
            );
            let width = u16::try_from(position.len()).unwrap_or(0);
            if footer.width > width {
                let pos_area = Rect::new(footer.right() - width, footer.y, width, 1);
                Paragraph::new(Span::styled(
                    position,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ))
                .render(pos_area, buf);
            }
        }
    }
}
