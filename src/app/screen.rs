// SPDX-License-Identifier: MPL-2.0
//! The screens the application can display.

use crate::ui::navbar::Tab;

/// Active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignUp,
    SignIn,
    EditProfile,
}

impl Screen {
    /// The i18n key for the window title suffix.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::SignUp => "title-sign-up",
            Screen::SignIn => "title-sign-in",
            Screen::EditProfile => "title-edit-profile",
        }
    }

    /// The navbar tab representing this screen.
    #[must_use]
    pub fn tab(self) -> Tab {
        match self {
            Screen::SignUp => Tab::SignUp,
            Screen::SignIn => Tab::SignIn,
            Screen::EditProfile => Tab::EditProfile,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::SignUp => Screen::SignUp,
            Tab::SignIn => Screen::SignIn,
            Tab::EditProfile => Screen::EditProfile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_round_trips_through_screen() {
        for screen in [Screen::SignUp, Screen::SignIn, Screen::EditProfile] {
            assert_eq!(Screen::from(screen.tab()), screen);
        }
    }

    #[test]
    fn default_screen_is_sign_up() {
        assert_eq!(Screen::default(), Screen::SignUp);
    }
}
