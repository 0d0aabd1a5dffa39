// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform the user about blocked
//! submissions or other outcomes without interrupting interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the stack and its dismissal deadlines
//! - [`toast`] - Toast widget for rendering notifications
//!
//! The manager is constructed once at application start and owned by the
//! root state; there is no global container. Every toast expires after a
//! fixed delay on its own deadline, and dismissal removes the entry
//! entirely, which also cancels its pending expiry.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity, TOAST_TIMEOUT};
pub use toast::Toast;
