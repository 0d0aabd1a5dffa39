// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: screen tabs plus locale and theme selectors.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// The screen a tab activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    SignUp,
    SignIn,
    EditProfile,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::SignUp, Tab::SignIn, Tab::EditProfile];

    fn i18n_key(self) -> &'static str {
        match self {
            Tab::SignUp => "nav-sign-up",
            Tab::SignIn => "nav-sign-in",
            Tab::EditProfile => "nav-edit-profile",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    LocaleSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub theme_mode: ThemeMode,
}

/// Renders the navigation bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new().spacing(spacing::XS);
    for tab in Tab::ALL {
        let label = Text::new(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY);
        tabs = tabs.push(
            button(label)
                .on_press(Message::TabSelected(tab))
                .padding([spacing::XS, spacing::SM])
                .style(styles::nav_tab(tab == ctx.active)),
        );
    }

    let locale_picker = pick_list(
        ctx.i18n.available_locales.clone(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LocaleSelected,
    )
    .text_size(typography::BODY)
    .padding(spacing::XXS);

    let theme_picker = pick_list(
        ThemeMode::ALL,
        Some(ctx.theme_mode),
        Message::ThemeSelected,
    )
    .text_size(typography::BODY)
    .padding(spacing::XXS);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(tabs).width(Length::Fill))
        .push(locale_picker)
        .push(theme_picker);

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}
