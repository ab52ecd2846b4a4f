// SPDX-License-Identifier: MPL-2.0
//! HUD banner lifecycle management.
//!
//! The `Manager` owns the single "current" slot observed by the presentation
//! surface. Requests go through a [`HudHandle`], which can be cloned and used
//! from any thread; a [`Lane`] serializes them and reports back with
//! [`LaneEvent`]s that the UI thread applies via [`Manager::apply`].
//!
//! At most one banner is current at any time, banners are shown in call
//! order, and a dismissal only ever clears the record it was meant for.

use super::lane::{Lane, LaneEvent};
use super::notification::{Notification, NotificationId};
use super::timing::HudTiming;
use crate::error::{Error, Result};
use iced::stream;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex};

/// Cloneable, thread-safe entry point for showing HUD banners.
#[derive(Debug, Clone)]
pub struct HudHandle {
    requests: mpsc::UnboundedSender<Notification>,
}

impl HudHandle {
    /// Queues `record` for display. Returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaneClosed`] if the lane has shut down.
    pub fn show(&self, record: Notification) -> Result<()> {
        tracing::debug!(id = ?record.id(), "queueing HUD banner");
        self.requests.send(record).map_err(|_| Error::LaneClosed)
    }
}

/// Shared lane slot, handed to the subscription as its data.
///
/// Hashes to a constant, so every `subscription()` call names the same
/// running lane.
#[derive(Debug, Clone)]
struct LaneSlot(Arc<Mutex<Option<Lane>>>);

impl Hash for LaneSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "hud-lane".hash(state);
    }
}

/// Owns the current HUD record and the lane that feeds it.
#[derive(Debug)]
pub struct Manager {
    handle: HudHandle,
    current: watch::Sender<Option<Notification>>,
    lane: LaneSlot,
    timing: HudTiming,
}

impl Manager {
    /// Creates a manager with an empty slot and an idle lane.
    #[must_use]
    pub fn new(timing: HudTiming) -> Self {
        let (requests, receiver) = mpsc::unbounded_channel();
        let (current, _) = watch::channel(None);

        Self {
            handle: HudHandle { requests },
            current,
            lane: LaneSlot(Arc::new(Mutex::new(Some(Lane::new(receiver, timing.cooldown))))),
            timing,
        }
    }

    /// Returns a handle that can queue banners from any thread.
    #[must_use]
    pub fn handle(&self) -> HudHandle {
        self.handle.clone()
    }

    /// Queues `record` for display. See [`HudHandle::show`].
    pub fn show(&self, record: Notification) -> Result<()> {
        self.handle.show(record)
    }

    #[must_use]
    pub fn timing(&self) -> HudTiming {
        self.timing
    }

    /// Takes the lane so the caller can drive it on its own executor.
    ///
    /// Returns `None` once the lane has been taken, either here or by
    /// [`subscription`](Self::subscription).
    pub fn take_lane(&self) -> Option<Lane> {
        self.lane.0.try_lock().ok().and_then(|mut slot| slot.take())
    }

    /// Runs the lane inside the Iced runtime and delivers its events as
    /// messages, so they are applied on the UI thread.
    pub fn subscription(&self) -> iced::Subscription<LaneEvent> {
        iced::Subscription::run_with(self.lane.clone(), |slot: &LaneSlot| {
            let lane = Arc::clone(&slot.0);
            stream::channel(16, move |output| async move {
                let taken = lane.lock().await.take();
                match taken {
                    Some(lane) => lane.run(output).await,
                    None => tracing::warn!("HUD lane already running elsewhere"),
                }
            })
        })
    }

    /// Applies a lane event. Must be called from the UI thread.
    pub fn apply(&mut self, event: LaneEvent) {
        match event {
            LaneEvent::Present(record) => self.publish(Some(record)),
            LaneEvent::Expire(id) => {
                self.remove(id);
            }
        }
    }

    /// Clears the current record if and only if its id is `id`.
    ///
    /// Returns `true` if the slot was cleared. A stale id is a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if self.current_id() != Some(id) {
            tracing::trace!(?id, "ignoring stale HUD removal");
            return false;
        }
        self.publish(None);
        true
    }

    /// Handles a tap on the banner with the given id.
    ///
    /// Dismisses first when the record asks for it, then runs its tap
    /// handler. Taps on a record that is no longer current are ignored.
    pub fn tap(&mut self, id: NotificationId) -> bool {
        let Some(record) = self.current().filter(|record| record.id() == id) else {
            return false;
        };

        if record.dismiss_on_tap() {
            self.remove(id);
        }
        if let Some(handler) = record.tap_handler() {
            handler();
        }
        true
    }

    /// Returns a copy of the current record.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<NotificationId> {
        self.current.borrow().as_ref().map(Notification::id)
    }

    /// Returns a receiver notified on every change of the current record.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    fn publish(&mut self, record: Option<Notification>) {
        self.current.send_replace(record);
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(HudTiming::default())
    }
}
