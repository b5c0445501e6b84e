// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state. The navbar is shown on every screen so the
//! hamburger menu is always available for navigation.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::detector;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use iced::{
    alignment,
    widget::{Column, Container, Row},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub settings: &'a SettingsState,
    pub image_panel: &'a detector::State,
    pub audio_panel: &'a detector::State,
    pub menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Detector => view_detector(&ctx),
        Screen::Settings => view_settings(ctx.settings, ctx.i18n),
        Screen::About => view_about(ctx.i18n),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let mut column = Column::new();

    if let Some(toasts) = notifications::overlay(ctx.notifications, ctx.i18n) {
        column = column.push(toasts.map(Message::Notification));
    }

    column = column.push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_detector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image_view = detector::view::view(
        ctx.image_panel,
        detector::view::ViewContext { i18n: ctx.i18n },
    )
    .map(Message::ImagePanel);

    let audio_view = detector::view::view(
        ctx.audio_panel,
        detector::view::ViewContext { i18n: ctx.i18n },
    )
    .map(Message::AudioPanel);

    let panels = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_y(alignment::Vertical::Top)
        .push(image_view)
        .push(audio_view);

    Container::new(panels)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn view_settings<'a>(settings: &'a SettingsState, i18n: &'a I18n) -> Element<'a, Message> {
    settings
        .view(SettingsViewContext { i18n })
        .map(Message::Settings)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
