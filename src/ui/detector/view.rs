// SPDX-License-Identifier: MPL-2.0
//! Rendering adapter for a detector panel.
//!
//! Everything here is a projection of [`super::State`]; no state is mutated
//! and no decisions are made beyond layout.

use super::component::{Message, Phase, State};
use crate::detection::{confidence_fill, format_confidence, DetectionReport, Verdict};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render a panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders one detector panel card.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let suffix = state.modality().key_suffix();

    let title = Text::new(i18n.tr(&format!("{suffix}-panel-title")))
        .size(typography::TITLE_SM);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(title)
        .push(drop_zone(state, i18n))
        .push(selection_line(state, i18n))
        .push(submit_row(state, i18n));

    match state.phase() {
        Phase::Result(report) => {
            content = content.push(verdict_card(state, report, i18n));
        }
        Phase::Failed(_) => {
            if let Some(message) = state.error_message(i18n) {
                content = content.push(
                    Text::new(message)
                        .size(typography::BODY)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::ERROR_500),
                        }),
                );
            }
        }
        Phase::Idle | Phase::Loading => {}
    }

    Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .style(container_styles::panel)
        .into()
}

/// Drop target with hover cue and a browse button.
fn drop_zone<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let suffix = state.modality().key_suffix();

    let hint = Text::new(i18n.tr(&format!("drop-hint-{suffix}")))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let browse = button(Text::new(i18n.tr("browse-button")).size(typography::BODY))
        .on_press(Message::BrowsePressed)
        .style(button_styles::unselected);

    let inner = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(hint)
        .push(browse);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::drop_zone(state.drop_hover()))
        .into()
}

/// Shows the selected file's name, or a placeholder.
fn selection_line<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let label = match state.selection() {
        Some(file) => i18n.tr_with_args("selected-file", &[("name", file.name.as_str())]),
        None => i18n.tr("no-file-selected"),
    };

    Text::new(label)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
        .into()
}

/// Submit button plus the loading indicator while a request is in flight.
fn submit_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let submit = button(Text::new(i18n.tr("detect-button")).size(typography::BODY))
        .on_press_maybe(state.can_submit().then_some(Message::SubmitPressed))
        .padding([spacing::XS, spacing::LG])
        .style(button_styles::primary);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(submit);

    if state.is_loading() {
        let spinner =
            AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation()).into_element();
        row = row.push(spinner).push(
            Text::new(i18n.tr("analyzing"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );
    }

    row.into()
}

/// Verdict headline, confidence text, and proportional confidence bar.
fn verdict_card<'a>(
    state: &'a State,
    report: &'a DetectionReport,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let authentic = report.verdict() == Verdict::Real;

    let headline = Text::new(i18n.tr(&report.verdict().i18n_key(state.modality())))
        .size(typography::BODY_LG)
        .shaping(text::Shaping::Advanced);

    let confidence_text = Text::new(format!("{}%", format_confidence(report.confidence)))
        .size(typography::BODY);

    let label = Text::new(i18n.tr("confidence-label"))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let confidence_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(label)
        .push(confidence_bar(report.confidence, authentic))
        .push(confidence_text);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(headline)
        .push(confidence_row);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::verdict_card(authentic))
        .into()
}

/// Horizontal bar whose filled portion is proportional to the confidence on
/// a 0-100 scale.
fn confidence_bar<'a>(confidence: f64, authentic: bool) -> Element<'a, Message> {
    let fill = confidence_fill(confidence);

    let mut bar = Row::new().width(Length::Fill);
    if fill > 0 {
        bar = bar.push(
            Container::new(Space::new().height(Length::Fixed(
                sizing::CONFIDENCE_BAR_HEIGHT,
            )))
            .width(Length::FillPortion(fill))
            .style(container_styles::confidence_fill(authentic)),
        );
    }
    if fill < 100 {
        bar = bar.push(Space::new().width(Length::FillPortion(100 - fill)));
    }

    Container::new(bar)
        .width(Length::Fill)
        .style(container_styles::confidence_track)
        .into()
}
