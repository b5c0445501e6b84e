// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File hover and drop events are only meaningful on the detector screen;
//! the periodic tick runs only while something animates or can expire, so
//! the application is fully idle otherwise.

use super::{Message, Screen};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the window event subscription for the current screen.
///
/// On the detector screen, file drag-and-drop events are routed to the
/// panels. Other screens ignore them.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Detector => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(iced::window::Event::FileHovered(path)) => {
                Some(Message::FileHovered(path))
            }
            event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
                Some(Message::FilesHoveredLeft)
            }
            event::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        }),
        Screen::Settings | Screen::About => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for spinner animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
