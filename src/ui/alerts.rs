// SPDX-License-Identifier: MPL-2.0
//! Dismissible alert banners, the native analog of flash messages.
//!
//! Alerts appear at the top of the content area, carry a close button, and
//! expire after a fixed delay. Like toasts, an alert's deadline lives with
//! its entry: removing the entry cancels the expiry, so nothing can fire
//! against a banner that is already gone.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, spacing, typography};
use crate::ui::notifications::Severity;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long a banner stays on screen before auto-dismissing.
pub const ALERT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Unique identifier for an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single alert banner.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    timeout: Duration,
}

impl Alert {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            timeout: ALERT_TIMEOUT,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
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

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.timeout
    }
}

/// Messages emitted by the banner stack.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(AlertId),
}

/// Owns the visible alert banners, oldest first.
#[derive(Debug, Default)]
pub struct Stack {
    alerts: Vec<Alert>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// Removes an alert by ID; unknown IDs are a safe no-op.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        if let Some(pos) = self.alerts.iter().position(|a| a.id() == id) {
            self.alerts.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes every banner whose deadline has passed.
    pub fn tick(&mut self) {
        self.alerts.retain(|a| !a.is_expired());
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.alerts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    /// Renders the banner stack.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.alerts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let banners: Vec<Element<'a, Message>> =
            self.alerts.iter().map(|alert| banner(alert, i18n)).collect();

        Column::with_children(banners)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into()
    }
}

/// Renders a single banner.
fn banner<'a>(alert: &'a Alert, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = alert.severity().color();

    let message_text = if alert.message_args.is_empty() {
        i18n.tr(alert.message_key())
    } else {
        let args: Vec<(&str, &str)> = alert
            .message_args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(alert.message_key(), &args)
    };

    let close_button = button(
        Text::new("\u{2715}")
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            }),
    )
    .on_press(Message::Dismiss(alert.id()))
    .padding(spacing::XXS)
    .style(move |_theme: &Theme, _status| iced::widget::button::Style {
        background: None,
        text_color: accent,
        border: iced::Border::default(),
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(message_text).size(typography::BODY)).width(Length::Fill),
        )
        .push(close_button);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |_theme: &Theme| banner_style(accent))
        .into()
}

/// Style function for a banner: tinted background with a severity accent.
fn banner_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::TINT,
            ..accent
        })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        text_color: None,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack = Stack::new();
        assert!(!stack.has_alerts());
        assert_eq!(stack.count(), 0);
    }

    #[test]
    fn alert_ids_are_unique() {
        assert_ne!(Alert::info("a").id(), Alert::info("a").id());
    }

    #[test]
    fn dismiss_removes_the_banner() {
        let mut stack = Stack::new();
        let alert = Alert::info("alert-welcome");
        let id = alert.id();
        stack.push(alert);

        assert!(stack.dismiss(id));
        assert!(!stack.has_alerts());
    }

    #[test]
    fn dismissing_a_missing_banner_is_a_no_op() {
        let mut stack = Stack::new();
        let stray = Alert::info("gone").id();
        assert!(!stack.dismiss(stray));
    }

    #[test]
    fn tick_expires_only_past_deadline_banners() {
        let mut stack = Stack::new();
        stack.push(Alert::info("old").timeout(Duration::ZERO));
        stack.push(Alert::success("new"));

        stack.tick();

        assert_eq!(stack.count(), 1);
        assert_eq!(stack.iter().next().unwrap().message_key(), "new");
    }

    #[test]
    fn handle_message_dismisses() {
        let mut stack = Stack::new();
        let alert = Alert::success("done");
        let id = alert.id();
        stack.push(alert);

        stack.handle_message(&Message::Dismiss(id));
        assert!(!stack.has_alerts());
    }

    #[test]
    fn banner_style_tints_the_accent_color() {
        let style = banner_style(Severity::Success.color());
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert!(color.a < 1.0);
            }
            _ => panic!("expected a tinted color background"),
        }
    }
}
