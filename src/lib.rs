// SPDX-License-Identifier: MPL-2.0
//! `veri_lens` is a desktop client for a deepfake-detection service, built
//! with the Iced GUI framework.
//!
//! It submits image and audio files to the detection endpoints and presents
//! the verdict with a confidence readout, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/veri_lens/0.2.0")]

pub mod app;
pub mod config;
pub mod detection;
pub mod error;
pub mod i18n;
pub mod ui;
