// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::ui::forms::{edit_profile, sign_in, sign_up};
use crate::ui::{alerts, navbar, notifications};
use std::time::Instant;

/// Options received from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override from the `--lang` CLI flag.
    pub lang: Option<String>,
}

/// Messages routed through the application root.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    SignUp(sign_up::Message),
    SignIn(sign_in::Message),
    EditProfile(edit_profile::Message),
    Notification(notifications::Message),
    Alert(alerts::Message),
    /// Periodic tick driving auto-dismiss deadlines and the entrance fade.
    Tick(Instant),
}
