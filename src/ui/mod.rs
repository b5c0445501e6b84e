// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`detector`] - The image and audio analysis panels
//! - [`settings`] - Application preferences and server configuration
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)

pub mod about;
pub mod design_tokens;
pub mod detector;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
