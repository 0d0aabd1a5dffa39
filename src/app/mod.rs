// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form screens.
//!
//! The `App` struct wires together the forms, localization, theming, and
//! the notification surfaces, and translates form events into side effects
//! like toasts, alert banners, and preference persistence. Policy
//! decisions (which screen a successful submission lands on, when the tick
//! subscription runs) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::alerts::{self, Alert};
use crate::ui::animation::Entrance;
use crate::ui::forms::{edit_profile, sign_in, sign_up};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging forms, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    sign_up: sign_up::State,
    sign_in: sign_in::State,
    edit_profile: edit_profile::State,
    /// Toast notification manager, owned here rather than global.
    notifications: notifications::Manager,
    /// Flash-message banners shown above the active form.
    alerts: alerts::Stack,
    /// Entrance fade of the active form card.
    entrance: Entrance,
    theme_mode: ThemeMode,
    /// Explicitly chosen language, kept for persistence.
    language_pref: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("toasts", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            sign_up: sign_up::State::new(),
            sign_in: sign_in::State::new(),
            edit_profile: edit_profile::State::new(),
            notifications: notifications::Manager::new(),
            alerts: alerts::Stack::new(),
            entrance: Entrance::new(),
            theme_mode: ThemeMode::default(),
            language_pref: None,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and launch
    /// flags, and seeds the welcome banner.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme,
            language_pref: config.language,
            ..Self::default()
        };

        app.alerts.push(Alert::info("alert-welcome"));

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_title = self.i18n.tr(self.screen.title_key());
        format!("{screen_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            !self.entrance.is_complete(),
            self.notifications.has_notifications(),
            self.alerts.has_alerts(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
