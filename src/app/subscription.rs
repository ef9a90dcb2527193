// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both listeners are registered once for the lifetime of the application:
//! the window-level press listener feeding the menu controller, and the
//! clock tick that drives notification timers while any are pending.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::menu;
use crate::ui::notifications::NotificationMessage;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Forwards every left-button press in the window, captured or not.
///
/// The menu controller decides from the hovered container whether the press
/// was outside every menu.
pub fn create_click_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::Menu(menu::Message::PointerPressed))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification timers.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(|at| Message::Notification(NotificationMessage::Tick(at)))
    } else {
        Subscription::none()
    }
}
