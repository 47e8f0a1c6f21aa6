//! Registration screen.

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
use crate::domain::forms::{FieldErrors, FormField, RegistrationField, RegistrationForm};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Result of a key on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAction {
    /// Nothing for the app to do.
    None,
    /// Validate and register.
    Submit,
    /// Switch to login.
    OpenLogin,
}

/// Registration screen UI.
pub struct RegisterScreen {
    inputs: FormInputs<RegistrationField>,
    theme: Theme,
}

impl RegisterScreen {
    /// Creates empty form.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let inputs = FormInputs::new(|field: RegistrationField| {
            let input = TextInput::new(field.label())
                .accent(theme.accent)
                .placeholder(field.label());
            match field {
                RegistrationField::Password | RegistrationField::ConfirmPassword => {
                    input.password()
                }
                RegistrationField::Name | RegistrationField::Email => input,
            }
        });

        Self { inputs, theme }
    }

    /// Returns the entered registration details.
    #[must_use]
    pub fn form(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.inputs.value(RegistrationField::Name).to_string(),
            email: self.inputs.value(RegistrationField::Email).to_string(),
            password: self.inputs.value(RegistrationField::Password).into(),
            confirm_password: self
                .inputs
                .value(RegistrationField::ConfirmPassword)
                .into(),
        }
    }

    /// Returns inline errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors<RegistrationField> {
        self.inputs.errors()
    }

    /// Shows per-field errors.
    pub fn set_rejected(&mut self, errors: FieldErrors<RegistrationField>) {
        self.inputs.set_errors(errors);
        self.inputs.focus_first_error();
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> RegisterAction {
        if EventHandler::is_submit_event(&key) {
            return RegisterAction::Submit;
        }
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return RegisterAction::OpenLogin;
        }
        if EventHandler::is_focus_next_event(&key) {
            self.inputs.focus_next();
        } else if EventHandler::is_focus_previous_event(&key) {
            self.inputs.focus_previous();
        } else {
            self.inputs.handle_edit_key(key);
        }

        RegisterAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let content_area = centered_box(60, self.inputs.height() + 8, area);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::from(Span::styled(" Register Here ", self.theme.title())).centered());

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [_, fields, button, _, link, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.inputs.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.inputs.render(fields, buf, self.theme.error_text());

        Paragraph::new(Line::from(Span::styled(
            "[ Register ]",
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(button, buf);

        Paragraph::new(Line::from(vec![
            Span::raw("Already have an account? "),
            Span::styled(
                "Login",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" (Ctrl+L)", self.theme.hint()),
        ]))
        .centered()
        .render(link, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Enter: Register", self.theme.hint()),
            Span::raw(" | "),
            Span::styled("Tab: Next field", self.theme.hint()),
            Span::raw(" | "),
            Span::styled("Esc: Back", self.theme.hint()),
        ]))
        .centered()
        .render(hints, buf);
    }
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for &RegisterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut RegisterScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill(screen: &mut RegisterScreen, values: [&str; 4]) {
        for value in values {
            type_str(screen, value);
            screen.handle_key(key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_form_collects_all_fields() {
        let mut screen = RegisterScreen::default();
        fill(&mut screen, ["Ann", "ann@example.com", "secret1", "secret1"]);

        let form = screen.form();
        assert_eq!(form.name, "Ann");
        assert_eq!(form.email, "ann@example.com");
        assert_eq!(form.password.expose(), "secret1");
        assert_eq!(form.confirm_password.expose(), "secret1");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_enter_submits() {
        let mut screen = RegisterScreen::default();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), RegisterAction::Submit);
    }

    #[test]
    fn test_ctrl_l_opens_login() {
        let mut screen = RegisterScreen::default();
        let event = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(event), RegisterAction::OpenLogin);
    }

    #[test]
    fn test_editing_clears_only_edited_field_error() {
        let mut screen = RegisterScreen::default();
        fill(&mut screen, ["", "a@b", "abc", "abc"]);
        screen.set_rejected(screen.form().validate());

        assert!(screen.errors().contains(RegistrationField::Name));
        assert!(screen.errors().contains(RegistrationField::Email));
        assert!(screen.errors().contains(RegistrationField::Password));
        assert!(!screen.errors().contains(RegistrationField::ConfirmPassword));

        // focus jumped to the first failing field (Name)
        type_str(&mut screen, "Z");

        assert!(!screen.errors().contains(RegistrationField::Name));
        assert!(screen.errors().contains(RegistrationField::Email));
        assert!(screen.errors().contains(RegistrationField::Password));
    }
}
