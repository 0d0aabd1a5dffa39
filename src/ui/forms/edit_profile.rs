// SPDX-License-Identifier: MPL-2.0
//! Edit-profile form: account details plus an optional password change.
//!
//! Leaving the new-password field blank means "keep my current password";
//! in that case the confirmation field is ignored at submit time. The
//! strength meter follows the new-password field only.

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
    current_password: String,
    new_password: String,
    confirm_password: String,
    strength: Option<StrengthResult>,
}

/// Messages emitted by the form's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    EmailChanged(String),
    CurrentPasswordChanged(String),
    NewPasswordChanged(String),
    ConfirmPasswordChanged(String),
    SubmitRequested,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the account fields, as the server-rendered page would.
    #[must_use]
    pub fn with_account(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Current strength meter state (`None` while new password is empty).
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
            Message::CurrentPasswordChanged(value) => {
                self.current_password = value;
                None
            }
            Message::NewPasswordChanged(value) => {
                self.new_password = value;
                self.strength = strength::evaluate(&self.new_password);
                None
            }
            Message::ConfirmPasswordChanged(value) => {
                self.confirm_password = value;
                None
            }
            Message::SubmitRequested => {
                match validation::confirm_new_password(&self.new_password, &self.confirm_password)
                {
                    SubmitCheck::Block { message_key } => Some(Event::Blocked { message_key }),
                    SubmitCheck::Allow => {
                        self.current_password.clear();
                        self.new_password.clear();
                        self.confirm_password.clear();
                        self.strength = None;
                        Some(Event::Submitted {
                            username: self.username.clone(),
                        })
                    }
                }
            }
        }
    }

    /// Renders the form.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("title-edit-profile")).size(typography::TITLE_LG);

        let username = text_input(&i18n.tr("field-username"), &self.username)
            .on_input(Message::UsernameChanged)
            .padding(spacing::XS);

        let email = text_input(&i18n.tr("field-email"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS);

        let current_password =
            text_input(&i18n.tr("field-current-password"), &self.current_password)
                .on_input(Message::CurrentPasswordChanged)
                .secure(true)
                .padding(spacing::XS);

        let new_password = text_input(
            &i18n.tr("placeholder-new-password-optional"),
            &self.new_password,
        )
        .on_input(Message::NewPasswordChanged)
        .secure(true)
        .padding(spacing::XS);

        let confirm_password = text_input(
            &i18n.tr("field-confirm-new-password"),
            &self.confirm_password,
        )
        .on_input(Message::ConfirmPasswordChanged)
        .on_submit(Message::SubmitRequested)
        .secure(true)
        .padding(spacing::XS);

        let submit = button(Text::new(i18n.tr("button-save-changes")).size(typography::BODY))
            .on_press(Message::SubmitRequested)
            .padding([spacing::XS, spacing::MD])
            .style(styles::primary);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(username)
            .push(email)
            .push(current_password)
            .push(new_password);

        // The meter slots directly under the new-password field.
        if let Some(result) = &self.strength {
            form = form.push(strength_meter::view(result, i18n));
        }

        form.push(confirm_password).push(submit).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NEW_PASSWORD_MISMATCH_KEY;

    fn filled_state() -> State {
        State::with_account("dave", "dave@example.com")
    }

    #[test]
    fn blank_new_password_submits_regardless_of_confirmation() {
        let mut state = filled_state();
        state.update(Message::ConfirmPasswordChanged("stray text".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Submitted {
                username: "dave".into()
            })
        );
    }

    #[test]
    fn mismatched_new_passwords_block_submission() {
        let mut state = filled_state();
        state.update(Message::NewPasswordChanged("Secret1!".into()));
        state.update(Message::ConfirmPasswordChanged("Secret2!".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Blocked {
                message_key: NEW_PASSWORD_MISMATCH_KEY
            })
        );
    }

    #[test]
    fn matching_new_passwords_submit_and_clear_password_fields() {
        let mut state = filled_state();
        state.update(Message::CurrentPasswordChanged("old".into()));
        state.update(Message::NewPasswordChanged("Secret1!".into()));
        state.update(Message::ConfirmPasswordChanged("Secret1!".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Submitted {
                username: "dave".into()
            })
        );
        assert!(state.current_password.is_empty());
        assert!(state.new_password.is_empty());
        assert!(state.confirm_password.is_empty());
        assert!(state.strength().is_none());
        // Account fields survive the submit.
        assert_eq!(state.username, "dave");
    }

    #[test]
    fn new_password_drives_the_meter() {
        let mut state = filled_state();
        state.update(Message::NewPasswordChanged("abc".into()));
        assert_eq!(state.strength().unwrap().score(), 1);

        state.update(Message::NewPasswordChanged(String::new()));
        assert!(state.strength().is_none());
    }

    #[test]
    fn current_password_does_not_drive_the_meter() {
        let mut state = filled_state();
        state.update(Message::CurrentPasswordChanged("Abcdef1!".into()));
        assert!(state.strength().is_none());
    }
}
