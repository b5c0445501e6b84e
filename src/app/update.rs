// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and dispatches
//! here, so each handler states exactly which parts of the application it
//! touches.

use super::{Message, Screen};
use crate::config;
use crate::detection::{client::DEFAULT_SERVER_URL, DetectionClient, Modality, SelectedFile};
use crate::i18n::fluent::I18n;
use crate::ui::detector;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub settings: &'a mut settings::State,
    pub image_panel: &'a mut detector::State,
    pub audio_panel: &'a mut detector::State,
    pub client: &'a mut DetectionClient,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn panel_mut(&mut self, modality: Modality) -> &mut detector::State {
        match modality {
            Modality::Image => self.image_panel,
            Modality::Audio => self.audio_panel,
        }
    }
}

/// Wraps a panel message into the top-level message for its modality.
pub fn panel_message(modality: Modality, message: detector::Message) -> Message {
    match modality {
        Modality::Image => Message::ImagePanel(message),
        Modality::Audio => Message::AudioPanel(message),
    }
}

/// Picks the panel a file belongs to, by extension family.
///
/// Files with unrecognized extensions go to the image panel so that
/// selecting them stays possible; submit will reject them with the
/// invalid-type message.
pub fn route_modality(path: &Path) -> Modality {
    Modality::from_path(path).unwrap_or(Modality::Image)
}

/// Handles a detector panel message and performs the effect it requests.
pub fn handle_panel_message(
    ctx: &mut UpdateContext<'_>,
    modality: Modality,
    message: detector::Message,
) -> Task<Message> {
    let effect = ctx.panel_mut(modality).handle(message);

    match effect {
        detector::Effect::None => Task::none(),
        detector::Effect::OpenFileDialog => open_file_dialog(ctx, modality),
        detector::Effect::Submit(file) => submit_detection(ctx, modality, file),
    }
}

/// Spawns the file dialog for a panel.
///
/// Besides the modality's own filter, an "All files" filter is offered on
/// purpose: type validation is a submit-time concern, so any file must stay
/// selectable.
fn open_file_dialog(ctx: &UpdateContext<'_>, modality: Modality) -> Task<Message> {
    let suffix = modality.key_suffix();
    let title = ctx.i18n.tr(&format!("dialog-title-{suffix}"));
    let filter_name = ctx.i18n.tr(&format!("dialog-filter-{suffix}"));
    let all_files = ctx.i18n.tr("dialog-filter-all");

    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, modality.dialog_extensions())
                .add_filter(&all_files, &["*"])
                .pick_file()
                .await;

            handle.and_then(|h| SelectedFile::from_path(h.path()).ok())
        },
        move |selection| panel_message(modality, detector::Message::FileChosen(selection)),
    )
}

/// Issues the single detection request for a validated submission.
fn submit_detection(
    ctx: &UpdateContext<'_>,
    modality: Modality,
    file: SelectedFile,
) -> Task<Message> {
    let client = ctx.client.clone();

    Task::perform(
        async move { client.detect(modality, file).await },
        move |result| panel_message(modality, detector::Message::Completed(result)),
    )
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::OpenDetector => handle_screen_switch(ctx, Screen::Detector),
        navbar::Event::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
        navbar::Event::OpenAbout => handle_screen_switch(ctx, Screen::About),
    }
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        settings::Event::None => {}
        settings::Event::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx);
        }
        settings::Event::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
        }
        settings::Event::ServerUrlCommitted(url) => {
            *ctx.client = DetectionClient::new(url);
            persist_preferences(ctx);
        }
    }
    Task::none()
}

/// Switches screens, committing pending settings edits first.
///
/// Leaving the settings screen with an invalid server URL keeps the user
/// there, mirroring how a half-typed address must never become the active
/// endpoint.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == Screen::Settings && target != Screen::Settings {
        match ctx.settings.commit_server_url() {
            Ok(Some(url)) => {
                *ctx.client = DetectionClient::new(url);
                persist_preferences(ctx);
            }
            Ok(None) => {}
            Err(()) => return Task::none(),
        }
    }

    *ctx.screen = target;
    *ctx.menu_open = false;
    Task::none()
}

/// Applies the hover cue to the panel a hovered file would land in.
pub fn handle_file_hovered(ctx: &mut UpdateContext<'_>, path: PathBuf) {
    if *ctx.screen != Screen::Detector {
        return;
    }
    let modality = route_modality(&path);
    let _ = ctx.panel_mut(modality).handle(detector::Message::DragEntered);
}

/// Clears the hover cue on both panels.
pub fn handle_files_hover_left(ctx: &mut UpdateContext<'_>) {
    let _ = ctx.image_panel.handle(detector::Message::DragLeft);
    let _ = ctx.audio_panel.handle(detector::Message::DragLeft);
}

/// Adopts a dropped file as the selection of the matching panel.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    handle_files_hover_left(ctx);

    if *ctx.screen != Screen::Detector {
        return Task::none();
    }

    match SelectedFile::from_path(&path) {
        Ok(file) => {
            let modality = route_modality(&path);
            let _ = ctx
                .panel_mut(modality)
                .handle(detector::Message::FileDropped(file));
        }
        Err(_) => {
            ctx.notifications.push(notifications::Notification::warning(
                "notification-file-read-error",
            ));
        }
    }
    Task::none()
}

/// Saves the current preferences, surfacing a warning toast on failure.
pub fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let mut config = config::Config::default();
    config.general.language = Some(ctx.i18n.current_locale().to_string());
    config.general.theme_mode = *ctx.theme_mode;

    let url = ctx.client.base_url();
    if url != DEFAULT_SERVER_URL {
        config.server.base_url = Some(url.to_string());
    }

    if config::save(&config).is_err() {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extensions_route_to_the_image_panel() {
        assert_eq!(route_modality(Path::new("notes.txt")), Modality::Image);
        assert_eq!(route_modality(Path::new("photo.jpg")), Modality::Image);
        assert_eq!(route_modality(Path::new("clip.mp3")), Modality::Audio);
    }

    #[test]
    fn panel_message_wraps_by_modality() {
        let msg = panel_message(Modality::Audio, detector::Message::SubmitPressed);
        assert!(matches!(msg, Message::AudioPanel(_)));

        let msg = panel_message(Modality::Image, detector::Message::SubmitPressed);
        assert!(matches!(msg, Message::ImagePanel(_)));
    }
}
