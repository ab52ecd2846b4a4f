// SPDX-License-Identifier: MPL-2.0
//! Single-lane request queue for HUD banners.
//!
//! The lane owns the receiving end of the request channel and processes one
//! request at a time, in call order:
//!
//! 1. emit [`LaneEvent::Present`]
//! 2. wait for the record's display duration
//! 3. emit [`LaneEvent::Expire`]
//! 4. wait for the cooldown gap
//!
//! The lane never touches the current-record slot. It only emits events;
//! the UI thread applies them through [`Manager::apply`](super::Manager::apply).
//! Waiting uses tokio timers, so no thread is parked during a banner.

use super::notification::{Notification, NotificationId};
use iced::futures::{Sink, SinkExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events the lane asks the UI thread to apply.
#[derive(Debug, Clone)]
pub enum LaneEvent {
    /// Make this record the current one.
    Present(Notification),
    /// The display time of this record elapsed.
    Expire(NotificationId),
}

/// Background half of the HUD manager.
#[derive(Debug)]
pub struct Lane {
    requests: mpsc::UnboundedReceiver<Notification>,
    cooldown: Duration,
}

impl Lane {
    pub(super) fn new(requests: mpsc::UnboundedReceiver<Notification>, cooldown: Duration) -> Self {
        Self { requests, cooldown }
    }

    /// Processes requests until every sender is dropped or the sink closes.
    pub async fn run<S>(mut self, mut sink: S)
    where
        S: Sink<LaneEvent> + Unpin,
    {
        while let Some(record) = self.requests.recv().await {
            let id = record.id();
            let hold = record.display_duration();
            tracing::debug!(?id, ?hold, "presenting HUD banner");

            if sink.send(LaneEvent::Present(record)).await.is_err() {
                break;
            }
            tokio::time::sleep(hold).await;

            tracing::debug!(?id, "HUD banner expired");
            if sink.send(LaneEvent::Expire(id)).await.is_err() {
                break;
            }
            tokio::time::sleep(self.cooldown).await;
        }
        tracing::debug!("HUD lane stopped");
    }
}
