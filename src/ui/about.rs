// SPDX-License-Identifier: MPL-2.0
//! About screen with version and license information.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// The about screen emits no messages of its own.
#[derive(Debug, Clone)]
pub enum Message {}

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let secondary = |theme: &Theme| text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr_with_args(
                "about-version",
                &[("version", env!("CARGO_PKG_VERSION"))],
            ))
            .size(typography::BODY)
            .style(secondary),
        )
        .push(Text::new(i18n.tr("about-description")).size(typography::BODY))
        .push(
            Text::new(i18n.tr("about-license"))
                .size(typography::BODY_SM)
                .style(secondary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}
