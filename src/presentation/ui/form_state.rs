//! Input state shared by the login and registration screens.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Widget,
};

use crate::domain::forms::{FieldErrors, FormField};
use crate::presentation::widgets::{InputChange, LABELED_INPUT_HEIGHT, LabeledInput, TextInput};

/// Inputs for every field of a form, the focused field and inline errors.
#[derive(Debug, Clone)]
pub struct FormInputs<F: FormField> {
    inputs: Vec<(F, TextInput)>,
    focus: usize,
    errors: FieldErrors<F>,
}

impl<F: FormField> FormInputs<F> {
    /// Builds one input per field, in `F::ALL` order, focusing the first.
    #[must_use]
    pub fn new(make_input: impl Fn(F) -> TextInput) -> Self {
        let mut inputs: Vec<_> = F::ALL.iter().map(|&f| (f, make_input(f))).collect();
        if let Some((_, first)) = inputs.first_mut() {
            first.set_focused(true);
        }

        Self {
            inputs,
            focus: 0,
            errors: FieldErrors::new(),
        }
    }

    /// Returns the current text of a field.
    #[must_use]
    pub fn value(&self, field: F) -> &str {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, input)| input.value())
    }

    /// Returns focused field.
    #[must_use]
    pub fn focused_field(&self) -> Option<F> {
        self.inputs.get(self.focus).map(|(f, _)| *f)
    }

    /// Returns inline errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors<F> {
        &self.errors
    }

    /// Replaces the inline errors with a fresh validation result.
    pub fn set_errors(&mut self, errors: FieldErrors<F>) {
        self.errors = errors;
    }

    /// Moves focus down, wrapping.
    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.set_focus((self.focus + 1) % self.inputs.len());
        }
    }

    /// Moves focus up, wrapping.
    pub fn focus_previous(&mut self) {
        if !self.inputs.is_empty() {
            let len = self.inputs.len();
            self.set_focus((self.focus + len - 1) % len);
        }
    }

    /// Moves focus to the first field carrying an error.
    pub fn focus_first_error(&mut self) {
        if let Some(pos) = self
            .inputs
            .iter()
            .position(|(f, _)| self.errors.contains(*f))
        {
            self.set_focus(pos);
        }
    }

    /// Feeds an editing key to the focused input.
    ///
    /// An edit clears that field's error and leaves the others alone.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> InputChange {
        let Some((field, input)) = self.inputs.get_mut(self.focus) else {
            return InputChange::Ignored;
        };

        let change = input.handle_key(key);
        if change == InputChange::Edited {
            self.errors.clear(*field);
        }
        change
    }

    /// Total rows needed to render every field.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.inputs.len()).unwrap_or(u16::MAX) * LABELED_INPUT_HEIGHT
    }

    /// Renders every field stacked vertically.
    pub fn render(&self, area: Rect, buf: &mut Buffer, error_style: Style) {
        let rows = Layout::vertical(
            self.inputs
                .iter()
                .map(|_| Constraint::Length(LABELED_INPUT_HEIGHT)),
        )
        .split(area);

        for ((field, input), row) in self.inputs.iter().zip(rows.iter()) {
            LabeledInput::new(input, self.errors.get(*field))
                .error_style(error_style)
                .render(*row, buf);
        }
    }

    fn set_focus(&mut self, index: usize) {
        if let Some((_, input)) = self.inputs.get_mut(self.focus) {
            input.set_focused(false);
        }
        self.focus = index;
        if let Some((_, input)) = self.inputs.get_mut(self.focus) {
            input.set_focused(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::RegistrationField;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn form() -> FormInputs<RegistrationField> {
        FormInputs::new(|f: RegistrationField| TextInput::new(f.label()))
    }

    fn type_str(inputs: &mut FormInputs<RegistrationField>, text: &str) {
        for c in text.chars() {
            inputs.handle_edit_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut inputs = form();
        assert_eq!(inputs.focused_field(), Some(RegistrationField::Name));

        inputs.focus_previous();
        assert_eq!(inputs.focused_field(), Some(RegistrationField::ConfirmPassword));

        inputs.focus_next();
        inputs.focus_next();
        assert_eq!(inputs.focused_field(), Some(RegistrationField::Email));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut inputs = form();
        type_str(&mut inputs, "Ann");
        inputs.focus_next();
        type_str(&mut inputs, "ann@x.io");

        assert_eq!(inputs.value(RegistrationField::Name), "Ann");
        assert_eq!(inputs.value(RegistrationField::Email), "ann@x.io");
        assert_eq!(inputs.value(RegistrationField::Password), "");
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut inputs = form();
        let mut errors = FieldErrors::new();
        errors.insert(RegistrationField::Name, "bad name");
        errors.insert(RegistrationField::Email, "bad email");
        inputs.set_errors(errors);

        inputs.focus_next();
        type_str(&mut inputs, "x");

        assert!(inputs.errors().contains(RegistrationField::Name));
        assert!(!inputs.errors().contains(RegistrationField::Email));
    }

    #[test]
    fn test_cursor_move_keeps_error() {
        let mut inputs = form();
        let mut errors = FieldErrors::new();
        errors.insert(RegistrationField::Name, "bad name");
        inputs.set_errors(errors);

        inputs.handle_edit_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));

        assert!(inputs.errors().contains(RegistrationField::Name));
    }

    #[test]
    fn test_focus_first_error() {
        let mut inputs = form();
        let mut errors = FieldErrors::new();
        errors.insert(RegistrationField::Password, "short");
        inputs.set_errors(errors);

        inputs.focus_first_error();

        assert_eq!(inputs.focused_field(), Some(RegistrationField::Password));
    }
}
