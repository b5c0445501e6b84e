// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering notifications.
//!
//! Toasts appear as small cards with a severity-colored accent border and a
//! dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Renders a single toast notification.
fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent_color = notification.severity().color();

    let message_widget = Text::new(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(|theme: &Theme, _status| iced::widget::button::Style {
            background: None,
            text_color: theme.palette().text,
            ..Default::default()
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the stack of visible toasts, newest on top.
///
/// Returns `None` when nothing is visible so callers can skip the overlay
/// entirely.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let mut any = false;
    let mut column = Column::new().spacing(spacing::XS).padding(spacing::SM);

    for notification in manager.visible() {
        column = column.push(toast(notification, i18n));
        any = true;
    }

    if !any {
        return None;
    }

    Some(
        Container::new(column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .into(),
    )
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
