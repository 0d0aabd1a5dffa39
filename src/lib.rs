// SPDX-License-Identifier: MPL-2.0
//! `iced_accounts` is a small account-management front end built with the
//! Iced GUI framework.
//!
//! It provides sign-up, sign-in, and edit-profile forms with live password
//! strength feedback, submit-time confirmation checks, toast notifications,
//! and auto-dismissing alert banners, and demonstrates internationalization
//! with Fluent and user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod strength;
pub mod ui;
pub mod validation;
