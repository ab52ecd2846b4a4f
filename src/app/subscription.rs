// SPDX-License-Identifier: MPL-2.0
//! Subscriptions of the demo application.

use super::{App, Message};
use crate::config;
use crate::ui::notifications::ToastLayer;
use iced::{time, Subscription};
use std::time::Duration;

/// HUD lane, toast broadcasts and, while something moves, animation frames.
pub fn subscription(app: &App) -> Subscription<Message> {
    let hud = app.manager.subscription().map(Message::Hud);
    let toasts = ToastLayer::subscription(&app.broadcaster).map(Message::Toast);

    let frames = if app.surface.is_animating() || app.toasts.is_animating() {
        time::every(Duration::from_millis(config::FRAME_INTERVAL_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    };

    Subscription::batch([hud, toasts, frames])
}
