// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::detector;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ImagePanel(detector::Message),
    AudioPanel(detector::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    SwitchScreen(Screen),
    Notification(notifications::Message),
    /// A file drag entered the window.
    FileHovered(PathBuf),
    /// The file drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for spinner animation and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional detection server base URL, overriding the configured one.
    pub server_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `VERI_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional file path to preselect into the matching panel on startup.
    pub file_path: Option<String>,
}
