// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Provides the hamburger menu at the top of the detector screen, giving
//! access to the Settings and About screens.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenDetector,
    OpenSettings,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenDetector,
    OpenSettings,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenDetector => {
            *menu_open = false;
            Event::OpenDetector
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let menu_button = button(
        Text::new("☰")
            .size(typography::TITLE_MD)
            .shaping(text::Shaping::Advanced),
    )
    .on_press(Message::ToggleMenu)
    .padding(spacing::XS)
    .style(button_styles::menu_entry);

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let top_bar = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title);

    content = content.push(top_bar);

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entry = |label: String, message: Message| {
        button(Text::new(label).size(typography::BODY))
            .on_press(message)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::MD])
            .style(button_styles::menu_entry)
    };

    let menu = Column::new()
        .width(Length::Fixed(180.0))
        .push(entry(
            ctx.i18n.tr("navbar-detector"),
            Message::OpenDetector,
        ))
        .push(entry(
            ctx.i18n.tr("navbar-settings"),
            Message::OpenSettings,
        ))
        .push(entry(ctx.i18n.tr("navbar-about"), Message::OpenAbout));

    Container::new(menu)
        .padding(spacing::XXS)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| crate::ui::styles::container::panel(theme))
        .into()
}
