// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Form components report submission outcomes as events; this module
//! translates them into toasts, alert banners, and screen switches, and
//! persists preference changes.

use super::{App, Message, Screen};
use crate::config::{self, Config};
use crate::ui::alerts::Alert;
use crate::ui::animation::Entrance;
use crate::ui::forms::Event;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use iced::Task;

/// Processes a top-level message.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar_message) => handle_navbar_message(app, navbar_message),
        Message::SignUp(form_message) => {
            let event = app.sign_up.update(form_message);
            handle_sign_up_event(app, event)
        }
        Message::SignIn(form_message) => {
            let event = app.sign_in.update(form_message);
            handle_sign_in_event(app, event)
        }
        Message::EditProfile(form_message) => {
            let event = app.edit_profile.update(form_message);
            handle_edit_profile_event(app, event)
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::Alert(alert_message) => {
            app.alerts.handle_message(&alert_message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            app.alerts.tick();
            Task::none()
        }
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::TabSelected(tab) => {
            switch_screen(app, Screen::from(tab));
        }
        navbar::Message::LocaleSelected(locale) => {
            app.language_pref = Some(locale.to_string());
            app.i18n.set_locale(locale);
            persist_preferences(app);
        }
        navbar::Message::ThemeSelected(mode) => {
            app.theme_mode = mode;
            persist_preferences(app);
        }
    }
    Task::none()
}

fn handle_sign_up_event(app: &mut App, event: Option<Event>) -> Task<Message> {
    match event {
        Some(Event::Blocked { message_key }) => {
            app.notifications.push(Notification::danger(message_key));
        }
        Some(Event::Submitted { username }) => {
            app.alerts
                .push(Alert::success("alert-account-created").with_arg("username", &username));
            // Mirror the post-registration redirect to the sign-in page.
            switch_screen(app, Screen::SignIn);
        }
        None => {}
    }
    Task::none()
}

fn handle_sign_in_event(app: &mut App, event: Option<Event>) -> Task<Message> {
    match event {
        Some(Event::Blocked { message_key }) => {
            app.notifications.push(Notification::danger(message_key));
        }
        Some(Event::Submitted { username }) => {
            app.alerts
                .push(Alert::success("alert-welcome-back").with_arg("username", &username));
            app.edit_profile = crate::ui::forms::edit_profile::State::with_account(username, "");
            switch_screen(app, Screen::EditProfile);
        }
        None => {}
    }
    Task::none()
}

fn handle_edit_profile_event(app: &mut App, event: Option<Event>) -> Task<Message> {
    match event {
        Some(Event::Blocked { message_key }) => {
            app.notifications.push(Notification::danger(message_key));
        }
        Some(Event::Submitted { .. }) => {
            app.alerts.push(Alert::success("alert-profile-updated"));
        }
        None => {}
    }
    Task::none()
}

/// Switches the active screen and restarts its entrance fade.
pub fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.entrance = Entrance::new();
}

/// Writes the current preferences to disk, surfacing failures as a toast.
fn persist_preferences(app: &mut App) {
    let config = Config {
        language: app.language_pref.clone(),
        theme: app.theme_mode,
    };

    if config::save(&config).is_err() {
        app.notifications
            .push(Notification::warning("toast-config-save-failed"));
    }
}
