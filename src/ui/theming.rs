// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether this mode currently resolves to a dark appearance.
    ///
    /// `System` asks the OS; if the preference cannot be determined, dark is
    /// assumed to match the application default.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark(),
        }
    }

    /// All modes, in the order they appear in the settings screen.
    #[must_use]
    pub const fn all() -> [ThemeMode; 3] {
        [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }

    /// Localization key of the mode's label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_resolve_without_os_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "mode",
            ThemeMode::System,
        )]))
        .expect("serialize");
        assert!(toml.contains("system"));
    }

    #[test]
    fn all_modes_have_distinct_labels() {
        let keys: Vec<_> = ThemeMode::all().iter().map(|m| m.i18n_key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"theme-light"));
        assert!(keys.contains(&"theme-dark"));
        assert!(keys.contains(&"theme-system"));
    }
}
