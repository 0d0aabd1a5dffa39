// SPDX-License-Identifier: MPL-2.0
//! Account form components.
//!
//! Each form follows the "state down, messages up" pattern: `update`
//! mutates the form's own fields and returns an [`Event`] when something
//! the application root must act on happens (a blocked or accepted
//! submission). Submission acceptance is purely a UI outcome here; no
//! server round trip is involved.

pub mod edit_profile;
pub mod sign_in;
pub mod sign_up;

/// Events propagated from a form to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submission was blocked; the key resolves to a danger toast message.
    Blocked { message_key: &'static str },
    /// Submission was accepted.
    Submitted { username: String },
}
