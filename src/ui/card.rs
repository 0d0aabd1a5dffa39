// SPDX-License-Identifier: MPL-2.0
//! Card container for form content, with a fade-in entrance.
//!
//! `fade` is the entrance progress in `0.0..=1.0`; it scales the card's
//! surface and shadow alpha so the card materializes instead of popping.

use crate::ui::design_tokens::{radius, shadow, sizing, spacing};
use iced::widget::{container, Container};
use iced::{Color, Element, Length, Theme};

/// Wraps `content` in a fixed-width card surface.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>, fade: f32) -> Container<'a, M> {
    let fade = fade.clamp(0.0, 1.0);

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::LG)
        .style(move |theme: &Theme| card_style(theme, fade))
}

fn card_style(theme: &Theme, fade: f32) -> container::Style {
    let surface = theme.extended_palette().background.weak.color;
    let mut shadow = shadow::MD;
    shadow.color = Color {
        a: shadow.color.a * fade,
        ..shadow.color
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: surface.a * fade,
            ..surface
        })),
        border: iced::Border {
            color: Color {
                a: fade,
                ..theme.extended_palette().background.strong.color
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow,
        text_color: None,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_alpha(style: &container::Style) -> f32 {
        match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn fully_faded_in_card_is_opaque_relative_to_surface() {
        let theme = Theme::Dark;
        let start = card_style(&theme, 0.0);
        let end = card_style(&theme, 1.0);
        assert_eq!(background_alpha(&start), 0.0);
        assert!(background_alpha(&end) > background_alpha(&start));
    }

    #[test]
    fn fade_is_monotonic() {
        let theme = Theme::Light;
        let quarter = background_alpha(&card_style(&theme, 0.25));
        let half = background_alpha(&card_style(&theme, 0.5));
        assert!(half >= quarter);
    }
}
