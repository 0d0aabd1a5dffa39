// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`forms`] - The sign-up, sign-in, and edit-profile forms
//! - [`strength_meter`] - Live password strength indicator
//! - [`notifications`] - Toast notification system for user feedback
//! - [`alerts`] - Auto-dismissing alert banners (flash messages)
//! - [`navbar`] - Navigation bar with locale and theme selectors
//! - [`card`] - Card surface with entrance fade-in
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Entrance animation timing
//! - [`styles`] - Centralized button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod alerts;
pub mod animation;
pub mod card;
pub mod design_tokens;
pub mod forms;
pub mod navbar;
pub mod notifications;
pub mod strength_meter;
pub mod styles;
pub mod theming;
