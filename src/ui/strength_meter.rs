// SPDX-License-Identifier: MPL-2.0
//! Password strength indicator: a thin progress bar plus a caption.
//!
//! The meter renders only while the password field is non-empty; the form
//! state holds an `Option<StrengthResult>`, so there is never more than
//! one indicator per input.

use crate::i18n::fluent::I18n;
use crate::strength::{Label, StrengthResult};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::notifications::Severity;
use iced::widget::{progress_bar, text, Column, Text};
use iced::{Color, Element, Theme};

/// Maps a strength bucket to the severity whose color it borrows.
#[must_use]
pub fn severity_for(label: Label) -> Severity {
    match label {
        Label::Weak => Severity::Danger,
        Label::Medium => Severity::Warning,
        Label::Strong => Severity::Success,
    }
}

/// Renders the meter for a non-empty password.
pub fn view<'a, M: 'a>(result: &StrengthResult, i18n: &I18n) -> Element<'a, M> {
    let label = result.label();
    let fill_color = severity_for(label).color();
    let percent = result.percent();

    let bar = progress_bar(0.0..=100.0, percent)
        .girth(sizing::METER_HEIGHT)
        .style(move |theme: &Theme| bar_style(theme, fill_color));

    let caption = Text::new(i18n.tr(label.i18n_key()))
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fill_color),
        });

    Column::new()
        .spacing(spacing::XXS)
        .push(bar)
        .push(caption)
        .into()
}

/// Style function for the meter bar.
fn bar_style(theme: &Theme, fill_color: Color) -> progress_bar::Style {
    progress_bar::Style {
        background: iced::Background::Color(theme.extended_palette().background.weak.color),
        bar: iced::Background::Color(fill_color),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}
