// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the detector cards and settings sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Drop zone surface; the hover variant lights up while a file is dragged
/// over the window.
pub fn drop_zone(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let background = if hovered {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            }
        } else {
            extended.background.weak.color
        };
        let border_color = if hovered {
            palette::PRIMARY_500
        } else {
            extended.background.strong.color
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Verdict card, tinted by whether the media was judged authentic.
pub fn verdict_card(authentic: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = if authentic {
            palette::SUCCESS_500
        } else {
            palette::ERROR_500
        };

        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..accent })),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Background track of the confidence bar.
pub fn confidence_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled portion of the confidence bar.
pub fn confidence_fill(authentic: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = if authentic {
            palette::SUCCESS_500
        } else {
            palette::ERROR_500
        };

        container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
