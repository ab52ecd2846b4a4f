// SPDX-License-Identifier: MPL-2.0
//! Demo application showing HUD banners and toasts over regular content.
//!
//! The window holds some primary content, an optional modal sheet, and the
//! two overlay layers on top. Banners and toasts never block presses on the
//! content around them, and they stay visible above the sheet.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::notifications::{
    HudTiming, Manager, Notification, Surface, SurfaceConfig, ToastBroadcaster, ToastLayer,
    ToastTiming,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root state of the demo.
pub struct App {
    manager: Manager,
    surface: Surface,
    toasts: ToastLayer,
    broadcaster: ToastBroadcaster,
    sheet_open: bool,
    presses: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_banner", &self.manager.current_id())
            .field("toast", &self.toasts.current_id())
            .field("sheet_open", &self.sheet_open)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(&flags);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and wires the overlays together. A settings problem is
    /// reported as a warning banner rather than aborting.
    fn new(flags: &Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };
        let app = Self::with_config(&config);

        if let Some(warning) = config_warning {
            match Notification::warning(warning) {
                Ok(record) => {
                    if let Err(err) = app.manager.show(record) {
                        tracing::warn!(%err, "could not show settings warning");
                    }
                }
                Err(err) => tracing::warn!(%err, "invalid settings warning"),
            }
        }

        (app, Task::none())
    }

    fn with_config(config: &Config) -> Self {
        let surface_config = SurfaceConfig::from_config(config);
        let manager = Manager::new(HudTiming::from_config(&config.hud));
        let surface = Surface::new(manager.subscribe(), surface_config);
        let toasts = ToastLayer::new(
            ToastTiming::from_config(&config.toast, &config.hud),
            surface_config,
        );

        Self {
            manager,
            surface,
            toasts,
            broadcaster: ToastBroadcaster::new(),
            sheet_open: false,
            presses: 0,
        }
    }

    fn title(&self) -> String {
        String::from("iced_hud demo")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::update(self, message);
        self.surface.refresh(Instant::now());
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{DisplayEdge, LaneEvent, OverlayMessage};

    #[test]
    fn default_app_starts_without_overlays() {
        let app = App::default();
        assert!(app.surface.is_empty());
        assert!(!app.toasts.is_animating());
        let _ = app.view();
    }

    #[test]
    fn lane_events_reach_the_surface() {
        let mut app = App::default();
        let record = Notification::success("Saved").unwrap();
        let id = record.id();

        let _ = app.update(Message::Hud(LaneEvent::Present(record)));
        assert_eq!(app.surface.entering_id(), Some(id));

        let _ = app.update(Message::Hud(LaneEvent::Expire(id)));
        assert_eq!(app.surface.entering_id(), None);
        assert_eq!(app.surface.exiting_ids(), vec![id]);
    }

    #[test]
    fn tapping_a_banner_dismisses_it() {
        let mut app = App::default();
        let record = Notification::info("Tap me").unwrap();
        let id = record.id();
        let _ = app.update(Message::Hud(LaneEvent::Present(record)));

        let _ = app.update(Message::HudOverlay(OverlayMessage::Tapped(id)));
        assert_eq!(app.manager.current_id(), None);
    }

    #[test]
    fn primary_presses_are_counted_under_overlays() {
        let mut app = App::default();
        let _ = app.update(Message::ShowBanner(DisplayEdge::Top));
        let _ = app.update(Message::PrimaryPressed);
        let _ = app.update(Message::PrimaryPressed);
        assert_eq!(app.presses, 2);
    }

    #[test]
    fn sheet_toggles_and_view_keeps_building() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleSheet);
        assert!(app.sheet_open);
        let _ = app.view();
        let _ = app.update(Message::ToggleSheet);
        assert!(!app.sheet_open);
    }
}
