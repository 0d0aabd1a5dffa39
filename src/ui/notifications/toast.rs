// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast is a small severity-colored card with a header row (title plus
//! dismiss button) and a message body, stacked with its siblings in the
//! top-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        // Resolve the message text using i18n with optional arguments
        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let header = Text::new(i18n.tr("toast-header"))
            .size(typography::TITLE_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let notification_id = notification.id();
        let dismiss_button = button(
            Text::new("\u{2715}")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                }),
        )
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        let header_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(header).width(Length::Fill))
            .push(dismiss_button);

        let body = Text::new(message_text)
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let content = Column::new()
            .spacing(spacing::XS)
            .push(header_row)
            .push(body);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically in
    /// arrival order.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent_color)),
        border: iced::Border {
            color: accent_color,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => overlay(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => overlay(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
