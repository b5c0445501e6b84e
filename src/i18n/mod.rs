// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Bundles are embedded at build time from `assets/i18n/*.ftl`; the locale is
//! resolved from the CLI flag, then the config file, then the OS locale,
//! falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
