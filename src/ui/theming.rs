// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use iced::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Resolves the mode into a concrete Iced theme.
    ///
    /// `System` asks the OS; detection failures fall back to dark.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }

    #[test]
    fn modes_serialize_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            theme: ThemeMode,
        }
        let toml = toml::to_string(&Wrapper {
            theme: ThemeMode::Dark,
        })
        .unwrap();
        assert!(toml.contains("\"dark\""));
    }

    #[test]
    fn all_contains_every_mode() {
        assert_eq!(ThemeMode::ALL.len(), 3);
        assert!(ThemeMode::ALL.contains(&ThemeMode::System));
    }
}
