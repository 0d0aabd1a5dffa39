// SPDX-License-Identifier: MPL-2.0
//! Sign-in form: username and password only.
//!
//! There is no confirmation field, so the password guard never applies
//! here, and the single password field does not carry a strength meter.

use super::Event;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Text};
use iced::Element;

/// Form field state.
#[derive(Debug, Default)]
pub struct State {
    username: String,
    password: String,
}

/// Messages emitted by the form's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    SubmitRequested,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a form message, returning an event for the root on submit.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::UsernameChanged(value) => {
                self.username = value;
                None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                None
            }
            Message::SubmitRequested => {
                let username = std::mem::take(&mut self.username);
                self.password.clear();
                Some(Event::Submitted { username })
            }
        }
    }

    /// Renders the form.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("title-sign-in")).size(typography::TITLE_LG);

        let username = text_input(&i18n.tr("field-username"), &self.username)
            .on_input(Message::UsernameChanged)
            .padding(spacing::XS);

        let password = text_input(&i18n.tr("field-password"), &self.password)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::SubmitRequested)
            .secure(true)
            .padding(spacing::XS);

        let submit = button(Text::new(i18n.tr("button-sign-in")).size(typography::BODY))
            .on_press(Message::SubmitRequested)
            .padding([spacing::XS, spacing::MD])
            .style(styles::primary);

        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(username)
            .push(password)
            .push(submit)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_is_never_blocked() {
        let mut state = State::new();
        state.update(Message::UsernameChanged("carol".into()));
        state.update(Message::PasswordChanged("whatever".into()));

        let event = state.update(Message::SubmitRequested);
        assert_eq!(
            event,
            Some(Event::Submitted {
                username: "carol".into()
            })
        );
    }

    #[test]
    fn submitting_clears_the_password() {
        let mut state = State::new();
        state.update(Message::PasswordChanged("secret".into()));
        state.update(Message::SubmitRequested);
        assert!(state.password.is_empty());
    }
}
