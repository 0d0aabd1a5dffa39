// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays on screen before expiring.
pub const TOAST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color of a toast or alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Blocked submission or other failure (red).
    Danger,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::DANGER_500,
        }
    }
}

/// A notification to be displayed as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    /// Time on screen before expiry. Fixed in production; overridable so
    /// tests can exercise expiry without waiting.
    timeout: Duration,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` is resolved through the i18n system at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            timeout: TOAST_TIMEOUT,
        }
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates a danger notification.
    pub fn danger(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the expiry timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Whether this notification's deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age() >= self.timeout
    }
}
