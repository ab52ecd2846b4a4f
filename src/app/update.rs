// SPDX-License-Identifier: MPL-2.0
//! Message handling for the demo application.

use super::{App, Message};
use crate::ui::notifications::{
    DisplayEdge, Notification, OverlayMessage, Scheduled, Severity, ToastBroadcaster,
};
use iced::Task;
use std::time::{Duration, Instant};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Hud(event) => {
            app.manager.apply(event);
            Task::none()
        }
        Message::HudOverlay(OverlayMessage::Tapped(id)) => {
            app.manager.tap(id);
            Task::none()
        }
        Message::Toast(toast) => app
            .toasts
            .update(toast, Instant::now())
            .map_or_else(Task::none, schedule),
        Message::Frame(now) => {
            app.surface.tick(now);
            app.toasts.tick(now);
            Task::none()
        }
        Message::ShowBanner(edge) => {
            show(app, banner_for(edge, &app.broadcaster));
            Task::none()
        }
        Message::ShowBurst => {
            for (index, severity) in [Severity::Info, Severity::Success, Severity::Warning]
                .into_iter()
                .enumerate()
            {
                let record = Notification::builder(severity, format!("Queued banner {}", index + 1))
                    .duration(Duration::from_millis(1_500))
                    .build();
                show(app, record);
            }
            Task::none()
        }
        Message::BroadcastToast => {
            let record = Notification::builder(Severity::Success, "Copied to clipboard")
                .system_image("checkmark")
                .edge(DisplayEdge::Bottom)
                .build();
            match record {
                Ok(record) => {
                    app.broadcaster.broadcast(record);
                }
                Err(err) => tracing::warn!(%err, "invalid toast"),
            }
            Task::none()
        }
        Message::ToggleSheet => {
            app.sheet_open = !app.sheet_open;
            Task::none()
        }
        Message::PrimaryPressed => {
            app.presses += 1;
            Task::none()
        }
    }
}

/// Delivers a toast follow-up message after its delay.
fn schedule(scheduled: Scheduled) -> Task<Message> {
    let Scheduled { after, message } = scheduled;
    Task::perform(
        async move {
            tokio::time::sleep(after).await;
            message
        },
        Message::Toast,
    )
}

fn show(app: &App, record: crate::error::Result<Notification>) {
    let result = record.and_then(|record| app.manager.show(record));
    if let Err(err) = result {
        tracing::warn!(%err, "could not queue banner");
    }
}

/// Sample banner for each edge. The trailing one offers an undo that
/// answers with a toast.
fn banner_for(
    edge: DisplayEdge,
    broadcaster: &ToastBroadcaster,
) -> crate::error::Result<Notification> {
    let builder = match edge {
        DisplayEdge::Top => Notification::builder(Severity::Success, "Saved")
            .title("Document")
            .system_image("checkmark"),
        DisplayEdge::Bottom => {
            Notification::builder(Severity::Info, "Sync finished").system_image("bell")
        }
        DisplayEdge::Leading => Notification::builder(Severity::Warning, "Battery low")
            .system_image("warning")
            .ignores_safe_area(true),
        DisplayEdge::Trailing => {
            let broadcaster = broadcaster.clone();
            Notification::builder(Severity::Error, "Item deleted, tap to undo")
                .system_image("trash")
                .on_tap(move || {
                    if let Ok(record) = Notification::info("Item restored") {
                        broadcaster.broadcast(record);
                    }
                })
        }
    };
    builder.edge(edge).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_has_a_valid_sample() {
        let broadcaster = ToastBroadcaster::new();
        for edge in [
            DisplayEdge::Top,
            DisplayEdge::Bottom,
            DisplayEdge::Leading,
            DisplayEdge::Trailing,
        ] {
            let record = banner_for(edge, &broadcaster).unwrap();
            assert_eq!(record.display_edge(), edge);
        }
    }

    #[test]
    fn undo_banner_answers_with_a_toast() {
        let broadcaster = ToastBroadcaster::new();
        let mut receiver = broadcaster.subscribe();
        let record = banner_for(DisplayEdge::Trailing, &broadcaster).unwrap();

        let handler = record.tap_handler().unwrap();
        handler();

        assert_eq!(receiver.try_recv().unwrap().message(), "Item restored");
    }
}
