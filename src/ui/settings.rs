// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode, and detection server URL.
//!
//! Language and theme changes take effect (and persist) immediately. The
//! server URL is a free-form input committed on submit or when leaving the
//! screen; an invalid URL keeps the user on the settings screen with an
//! error, so a half-typed address can never become the active endpoint.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Error key shown under the URL input when it does not parse.
pub const SERVER_URL_INVALID_KEY: &str = "settings-server-url-invalid";

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ServerUrlChanged(String),
    ServerUrlSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeChanged(ThemeMode),
    ServerUrlCommitted(String),
}

/// Initial values for the settings state.
pub struct StateConfig {
    pub server_url: String,
    pub theme_mode: ThemeMode,
}

/// Settings screen state.
#[derive(Debug)]
pub struct State {
    server_url_input: String,
    server_url_committed: String,
    server_url_dirty: bool,
    server_url_error_key: Option<&'static str>,
    theme_mode: ThemeMode,
}

impl Default for State {
    fn default() -> Self {
        Self::new(StateConfig {
            server_url: crate::detection::client::DEFAULT_SERVER_URL.to_string(),
            theme_mode: ThemeMode::default(),
        })
    }
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            server_url_input: config.server_url.clone(),
            server_url_committed: config.server_url,
            server_url_dirty: false,
            server_url_error_key: None,
            theme_mode: config.theme_mode,
        }
    }

    /// Handles a settings message and returns the event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeChanged(mode)
            }
            Message::ServerUrlChanged(value) => {
                self.server_url_input = value;
                self.server_url_dirty = true;
                self.server_url_error_key = None;
                Event::None
            }
            Message::ServerUrlSubmitted => match self.commit_server_url() {
                Ok(Some(url)) => Event::ServerUrlCommitted(url),
                Ok(None) => Event::None,
                Err(()) => Event::None,
            },
        }
    }

    /// Attempts to commit a dirty URL input.
    ///
    /// Returns `Ok(Some(url))` when a new valid URL was committed,
    /// `Ok(None)` when there was nothing to commit, and `Err(())` when the
    /// input is invalid (an error key is set and the input stays dirty).
    pub fn commit_server_url(&mut self) -> Result<Option<String>, ()> {
        if !self.server_url_dirty {
            return Ok(None);
        }

        let trimmed = self.server_url_input.trim();
        let valid = reqwest::Url::parse(trimmed)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);

        if !valid {
            self.server_url_error_key = Some(SERVER_URL_INVALID_KEY);
            return Err(());
        }

        self.server_url_input = trimmed.to_string();
        self.server_url_committed = self.server_url_input.clone();
        self.server_url_dirty = false;
        self.server_url_error_key = None;
        Ok(Some(self.server_url_committed.clone()))
    }

    #[must_use]
    pub fn server_url_input(&self) -> &str {
        &self.server_url_input
    }

    #[must_use]
    pub fn server_url_dirty(&self) -> bool {
        self.server_url_dirty
    }

    #[must_use]
    pub fn server_url_error_key(&self) -> Option<&'static str> {
        self.server_url_error_key
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Render the settings screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let section_label = |key: &str| {
            Text::new(i18n.tr(key))
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                })
        };

        // Language selection
        let languages: Vec<LanguageIdentifier> = i18n.available_locales.clone();
        let language_picker = iced::widget::pick_list(
            languages,
            Some(i18n.current_locale().clone()),
            Message::LanguageSelected,
        );

        // Theme mode toggle group
        type ButtonStyleFn =
            fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style;
        let mut theme_row = Row::new().spacing(spacing::XS);
        for mode in ThemeMode::all() {
            let style: ButtonStyleFn = if mode == self.theme_mode {
                button_styles::selected
            } else {
                button_styles::unselected
            };
            theme_row = theme_row.push(
                button(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .on_press(Message::ThemeModeSelected(mode))
                    .style(style),
            );
        }

        // Server URL input
        let url_input = text_input(
            crate::detection::client::DEFAULT_SERVER_URL,
            &self.server_url_input,
        )
        .on_input(Message::ServerUrlChanged)
        .on_submit(Message::ServerUrlSubmitted)
        .padding(spacing::XS);

        let mut url_section = Column::new()
            .spacing(spacing::XS)
            .push(section_label("settings-server-url"))
            .push(url_input);

        if let Some(key) = self.server_url_error_key {
            url_section = url_section.push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        let content = Column::new()
            .spacing(spacing::LG)
            .max_width(480.0)
            .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(section_label("settings-language"))
                    .push(language_picker),
            )
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(section_label("settings-theme"))
                    .push(theme_row),
            )
            .push(url_section);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XL)
            .into()
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_url(url: &str) -> State {
        State::new(StateConfig {
            server_url: url.to_string(),
            theme_mode: ThemeMode::System,
        })
    }

    #[test]
    fn clean_state_commits_nothing() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        assert_eq!(state.commit_server_url(), Ok(None));
        assert!(!state.server_url_dirty());
    }

    #[test]
    fn valid_url_commits_and_clears_dirty_flag() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        state.update(Message::ServerUrlChanged(
            "http://detector.local:8080".to_string(),
        ));
        assert!(state.server_url_dirty());

        let event = state.update(Message::ServerUrlSubmitted);
        assert_eq!(
            event,
            Event::ServerUrlCommitted("http://detector.local:8080".to_string())
        );
        assert!(!state.server_url_dirty());
        assert!(state.server_url_error_key().is_none());
    }

    #[test]
    fn invalid_url_sets_error_and_stays_dirty() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        state.update(Message::ServerUrlChanged("not a url".to_string()));

        let event = state.update(Message::ServerUrlSubmitted);
        assert_eq!(event, Event::None);
        assert!(state.server_url_dirty());
        assert_eq!(state.server_url_error_key(), Some(SERVER_URL_INVALID_KEY));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        state.update(Message::ServerUrlChanged("ftp://example.com".to_string()));

        assert_eq!(state.commit_server_url(), Err(()));
        assert_eq!(state.server_url_error_key(), Some(SERVER_URL_INVALID_KEY));
    }

    #[test]
    fn editing_clears_previous_error() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        state.update(Message::ServerUrlChanged("garbage".to_string()));
        let _ = state.update(Message::ServerUrlSubmitted);
        assert!(state.server_url_error_key().is_some());

        state.update(Message::ServerUrlChanged("https://ok.example".to_string()));
        assert!(state.server_url_error_key().is_none());
    }

    #[test]
    fn url_is_trimmed_on_commit() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        state.update(Message::ServerUrlChanged(
            "  https://detector.example  ".to_string(),
        ));

        let event = state.update(Message::ServerUrlSubmitted);
        assert_eq!(
            event,
            Event::ServerUrlCommitted("https://detector.example".to_string())
        );
        assert_eq!(state.server_url_input(), "https://detector.example");
    }

    #[test]
    fn theme_selection_updates_state_and_emits_event() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        let event = state.update(Message::ThemeModeSelected(ThemeMode::Dark));
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn language_selection_is_forwarded_to_parent() {
        let mut state = state_with_url("http://127.0.0.1:5000");
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = state.update(Message::LanguageSelected(locale.clone()));
        assert_eq!(event, Event::LanguageChanged(locale));
    }
}
