// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the navbar, alert banners, and the active form card, with the
//! toast overlay stacked on top.

use super::{App, Message, Screen};
use crate::ui::card;
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Renders the full application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(&NavbarViewContext {
        i18n: &app.i18n,
        active: app.screen.tab(),
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    // The alert stack renders to nothing while empty.
    let banners: Element<'_, Message> = Container::new(app.alerts.view(&app.i18n).map(Message::Alert))
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .into();

    let form: Element<'_, Message> = match app.screen {
        Screen::SignUp => app.sign_up.view(&app.i18n).map(Message::SignUp),
        Screen::SignIn => app.sign_in.view(&app.i18n).map(Message::SignIn),
        Screen::EditProfile => app.edit_profile.view(&app.i18n).map(Message::EditProfile),
    };

    let content = Container::new(card::card(form, app.entrance.progress()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let base = Column::new().push(navbar).push(banners).push(content);

    let toast_overlay = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new().push(base).push(toast_overlay).into()
}
