//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::form_state::FormInputs;
use super::utils::centered_box;
use crate::domain::forms::{FieldErrors, FormField, LoginField, LoginForm};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Login form lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Waiting for input.
    Idle,
    /// Submitted, checking fields.
    Validating,
    /// Some fields failed.
    Rejected,
    /// All fields passed.
    Accepted,
}

/// Result of a key on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    /// Nothing for the app to do.
    None,
    /// Validate and log in.
    Submit,
    /// Switch to registration.
    OpenRegister,
}

/// Login screen UI.
pub struct LoginScreen {
    inputs: FormInputs<LoginField>,
    state: LoginState,
    theme: Theme,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let inputs = FormInputs::new(|field: LoginField| {
            let input = TextInput::new(field.label()).accent(theme.accent);
            match field {
                LoginField::Username => input.placeholder("Username"),
                LoginField::Password => input.password().placeholder("Password"),
            }
        });

        Self {
            inputs,
            state: LoginState::Idle,
            theme,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Returns the entered credentials.
    #[must_use]
    pub fn form(&self) -> LoginForm {
        LoginForm::new(
            self.inputs.value(LoginField::Username),
            self.inputs.value(LoginField::Password),
        )
    }

    /// Returns inline errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors<LoginField> {
        self.inputs.errors()
    }

    /// Sets validating state.
    pub fn set_validating(&mut self) {
        self.state = LoginState::Validating;
    }

    /// Sets accepted state.
    pub fn set_accepted(&mut self) {
        self.state = LoginState::Accepted;
        self.inputs.set_errors(FieldErrors::new());
    }

    /// Shows per-field errors.
    pub fn set_rejected(&mut self, errors: FieldErrors<LoginField>) {
        self.state = LoginState::Rejected;
        self.inputs.set_errors(errors);
        self.inputs.focus_first_error();
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Validating {
            return LoginAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return LoginAction::Submit;
        }
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return LoginAction::OpenRegister;
        }
        if EventHandler::is_focus_next_event(&key) {
            self.inputs.focus_next();
        } else if EventHandler::is_focus_previous_event(&key) {
            self.inputs.focus_previous();
        } else {
            self.inputs.handle_edit_key(key);
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let content_area = centered_box(56, self.inputs.height() + 9, area);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::from(Span::styled(" Login ", self.theme.title())).centered());

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title, _, fields, button, _, link, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(self.inputs.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Sign in to browse hospitals")
            .centered()
            .style(Style::default().fg(Color::White))
            .render(title, buf);

        self.inputs
            .render(fields, buf, self.theme.error_text());

        Paragraph::new(Line::from(Span::styled(
            "[ Login ]",
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(button, buf);

        Paragraph::new(Line::from(vec![
            Span::raw("Don't have an account? "),
            Span::styled(
                "Register",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" (Ctrl+R)", self.theme.hint()),
        ]))
        .centered()
        .render(link, buf);

        let status_line = match self.state {
            LoginState::Idle | LoginState::Rejected => Line::from(vec![
                Span::styled("Enter: Login", self.theme.hint()),
                Span::raw(" | "),
                Span::styled("Tab: Next field", self.theme.hint()),
                Span::raw(" | "),
                Span::styled("Esc: Quit", self.theme.hint()),
            ]),
            LoginState::Validating => Line::from(Span::styled(
                "Checking...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Accepted => Line::from(Span::styled(
                "Welcome!",
                Style::default().fg(Color::Green),
            )),
        };
        Paragraph::new(status_line).centered().render(status, buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
