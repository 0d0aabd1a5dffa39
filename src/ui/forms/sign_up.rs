// SPDX-License-Identifier: MPL-2.0
//! Sign-up form: username, email, password, and confirmation.
//!
//! The password field feeds the strength meter on every keystroke; the
//! confirmation field is checked only at submit time.

use super::Event;
use crate::i18n::fluent::I18n;
use crate::strength::{self, StrengthResult};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{strength_meter, styles};
use crate::validation::{self, SubmitCheck};
use iced::widget::{button, text_input, Column, Text};
use iced::Element;

/// Form field state.
#[derive(Debug, Default)]
pub struct State {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    strength: Option<StrengthResult>,
}

/// Messages emitted by the form's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    SubmitRequested,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current strength meter state (`None` while the field is empty).
    #[must_use]
    pub fn strength(&self) -> Option<&StrengthResult> {
        self.strength.as_ref()
    }

    /// Processes a form message, returning an event for the root on submit.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::UsernameChanged(value) => {
                self.username = value;
                None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                self.strength = strength::evaluate(&self.password);
                None
            }
            Message::ConfirmPasswordChanged(value) => {
                self.confirm_password = value;
                None
            }
            Message::SubmitRequested => {
                match validation::confirm_passwords(&self.password, &self.confirm_password) {
                    SubmitCheck::Block { message_key } => Some(Event::Blocked { message_key }),
                    SubmitCheck::Allow => {
                        let username = std::mem::take(&mut self.username);
                        self.email.clear();
                        self.password.clear();
                        self.confirm_password.clear();
                        self.strength = None;
                        Some(Event::Submitted { username })
                    }
                }
            }
        }
    }

    /// Renders the form.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("title-sign-up")).size(typography::TITLE_LG);

        let username = text_input(&i18n.tr("field-username"), &self.username)
            .on_input(Message::UsernameChanged)
            .padding(spacing::XS);

        let email = text_input(&i18n.tr("field-email"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS);

        let password = text_input(&i18n.tr("field-password"), &self.password)
            .on_input(Message::PasswordChanged)
            .secure(true)
            .padding(spacing::XS);

        let confirm_password =
            text_input(&i18n.tr("field-confirm-password"), &self.confirm_password)
                .on_input(Message::ConfirmPasswordChanged)
                .on_submit(Message::SubmitRequested)
                .secure(true)
                .padding(spacing::XS);

        let submit = button(Text::new(i18n.tr("button-sign-up")).size(typography::BODY))
            .on_press(Message::SubmitRequested)
            .padding([spacing::XS, spacing::MD])
            .style(styles::primary);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(username)
            .push(email)
            .push(password);

        // The meter slots directly under the password field it describes.
        if let Some(result) = &self.strength {
            form = form.push(strength_meter::view(result, i18n));
        }

        form.push(confirm_password).push(submit).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Label;
    use crate::validation::PASSWORD_MISMATCH_KEY;

    #[test]
    fn typing_a_password_updates_the_meter() {
        let mut state = State::new();
        state.update(Message::PasswordChanged("Abcdefg1".into()));

        let strength = state.strength().expect("meter should be present");
        assert_eq!(strength.score(), 4);
        assert_eq!(strength.label(), Label::Strong);
    }

    #[test]
    fn clearing_the_password_removes_the_meter() {
        let mut state = State::new();
        state.update(Message::PasswordChanged("abc".into()));
        assert!(state.strength().is_some());

        state.update(Message::PasswordChanged(String::new()));
        assert!(state.strength().is_none());
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        let mut state = State::new();
        state.update(Message::PasswordChanged("a".into()));
        state.update(Message::ConfirmPasswordChanged("b".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Blocked {
                message_key: PASSWORD_MISMATCH_KEY
            })
        );
        // Blocked submission leaves the fields untouched.
        assert_eq!(state.password, "a");
        assert_eq!(state.confirm_password, "b");
    }

    #[test]
    fn matching_passwords_submit_and_reset_the_form() {
        let mut state = State::new();
        state.update(Message::UsernameChanged("alice".into()));
        state.update(Message::EmailChanged("alice@example.com".into()));
        state.update(Message::PasswordChanged("Abcdef1!".into()));
        state.update(Message::ConfirmPasswordChanged("Abcdef1!".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Submitted {
                username: "alice".into()
            })
        );
        assert!(state.password.is_empty());
        assert!(state.confirm_password.is_empty());
        assert!(state.strength().is_none());
    }

    #[test]
    fn field_edits_produce_no_events() {
        let mut state = State::new();
        assert!(state.update(Message::UsernameChanged("bob".into())).is_none());
        assert!(state.update(Message::EmailChanged("b@c.d".into())).is_none());
        assert!(state
            .update(Message::ConfirmPasswordChanged("x".into()))
            .is_none());
    }
}
