// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the detector panels and
//! the settings screen.
//!
//! The `App` struct wires together the two detector panels, localization,
//! settings, and the detection client, and translates messages into side
//! effects like config persistence or the outbound detection requests. This
//! file intentionally keeps policy decisions (which panel receives a dropped
//! file, when preferences persist, screen switching rules) close to the main
//! update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::detection::{DetectionClient, Modality, SelectedFile};
use crate::i18n::fluent::I18n;
use crate::ui::detector;
use crate::ui::notifications;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the detector panels,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    settings: SettingsState,
    image_panel: detector::State,
    audio_panel: detector::State,
    client: DetectionClient,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("image_panel", &self.image_panel.phase())
            .field("audio_panel", &self.audio_panel.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Detector,
            settings: SettingsState::default(),
            image_panel: detector::State::new(Modality::Image),
            audio_panel: detector::State::new(Modality::Audio),
            client: DetectionClient::default(),
            theme_mode: ThemeMode::System,
            menu_open: false,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let server_url = flags
            .server_url
            .clone()
            .unwrap_or_else(|| config.server_url().to_string());

        let mut app = App {
            i18n,
            client: DetectionClient::new(server_url.clone()),
            settings: SettingsState::new(SettingsConfig {
                server_url,
                theme_mode: config.general.theme_mode,
            }),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // Preselect a file passed on the command line into the matching panel
        if let Some(path_str) = flags.file_path {
            let path = std::path::PathBuf::from(&path_str);
            match SelectedFile::from_path(&path) {
                Ok(file) => {
                    let modality = update::route_modality(&path);
                    let _ = app
                        .panel_mut(modality)
                        .handle(detector::Message::FileChosen(Some(file)));
                }
                Err(_) => {
                    app.notifications.push(notifications::Notification::warning(
                        "notification-file-read-error",
                    ));
                }
            }
        }

        (app, Task::none())
    }

    fn panel_mut(&mut self, modality: Modality) -> &mut detector::State {
        match modality {
            Modality::Image => &mut self.image_panel,
            Modality::Audio => &mut self.audio_panel,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.image_panel.is_loading() || self.audio_panel.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            settings: &mut self.settings,
            image_panel: &mut self.image_panel,
            audio_panel: &mut self.audio_panel,
            client: &mut self.client,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            notifications: &mut self.notifications,
        };

        match message {
            Message::ImagePanel(panel_message) => {
                update::handle_panel_message(&mut ctx, Modality::Image, panel_message)
            }
            Message::AudioPanel(panel_message) => {
                update::handle_panel_message(&mut ctx, Modality::Audio, panel_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => match about_message {},
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::FileHovered(path) => {
                update::handle_file_hovered(&mut ctx, path);
                Task::none()
            }
            Message::FilesHoveredLeft => {
                update::handle_files_hover_left(&mut ctx);
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Tick(_instant) => {
                // Animate spinners of any in-flight panel and let expired
                // notifications dismiss themselves.
                let _ = self.image_panel.handle(detector::Message::SpinnerTick);
                let _ = self.audio_panel.handle(detector::Message::SpinnerTick);
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            settings: &self.settings,
            image_panel: &self.image_panel,
            audio_panel: &self.audio_panel,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}
