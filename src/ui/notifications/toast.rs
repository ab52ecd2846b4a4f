// SPDX-License-Identifier: MPL-2.0
//! Toast layer: short notices delivered by broadcast.
//!
//! Any part of the application can announce a toast through a
//! [`ToastBroadcaster`]; the [`ToastLayer`] subscribed to it shows the most
//! recent one in a single slot, tucked into a corner, with a pulsing icon.
//!
//! Unlike HUD banners, toasts are not queued: the last broadcast wins the
//! slot. Each toast hides after a fixed display time and its content is
//! discarded a little later, once the exit animation is over. Both timers
//! are keyed by the toast's id, so a timer left over from a replaced toast
//! never hides the newer one.

use super::notification::{Notification, NotificationId};
use super::overlay_view::{self, CardStyle, OverlayMessage};
use super::placement::{self, CrossAlign};
use super::surface::{progress, SurfaceConfig};
use super::timing::ToastTiming;
use crate::ui::widgets::OverlayLayer;
use iced::futures::SinkExt;
use iced::stream;
use iced::widget::Stack;
use iced::{Element, Length};
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

/// Number of toasts a slow layer may fall behind before it skips some.
const BROADCAST_CAPACITY: usize = 16;

/// Icon scale keyframes over one pulse period: normal, large, small, normal.
const PULSE_KEYFRAMES: [(f32, f32); 4] = [(0.0, 1.0), (1.0 / 3.0, 1.2), (2.0 / 3.0, 0.9), (1.0, 1.0)];

/// Cloneable, thread-safe sender for toasts.
#[derive(Debug, Clone)]
pub struct ToastBroadcaster {
    sender: broadcast::Sender<Notification>,
}

impl ToastBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Announces `record` to every subscribed layer.
    ///
    /// Returns the number of layers that received it. With no layer
    /// listening the toast is dropped.
    pub fn broadcast(&self, record: Notification) -> usize {
        let id = record.id();
        match self.sender.send(record) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::warn!(?id, "toast dropped, no layer is listening");
                0
            }
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for ToastBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages handled by the toast layer.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// A broadcast toast arrived.
    Received(Notification),
    /// Display time of this toast elapsed.
    Hide(NotificationId),
    /// Exit animation of this toast is over.
    Discard(NotificationId),
    /// Interaction with the toast card.
    Card(OverlayMessage),
}

/// A message the host must deliver back after a delay.
#[derive(Debug, Clone)]
pub struct Scheduled {
    pub after: Duration,
    pub message: ToastMessage,
}

/// Broadcaster handed to the subscription as its data. Hashes to a
/// constant so repeated `subscription()` calls keep the running receiver.
#[derive(Debug, Clone)]
struct ToastFeed(ToastBroadcaster);

impl Hash for ToastFeed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "toast-feed".hash(state);
    }
}

#[derive(Debug, Clone)]
struct Shown {
    record: Notification,
    shown_at: Instant,
    hidden_at: Option<Instant>,
}

impl Shown {
    fn is_visible(&self) -> bool {
        self.hidden_at.is_none()
    }
}

/// Single-slot toast presenter.
#[derive(Debug)]
pub struct ToastLayer {
    slot: Option<Shown>,
    timing: ToastTiming,
    surface: SurfaceConfig,
    now: Instant,
}

impl ToastLayer {
    #[must_use]
    pub fn new(timing: ToastTiming, surface: SurfaceConfig) -> Self {
        Self {
            slot: None,
            timing,
            surface,
            now: Instant::now(),
        }
    }

    /// Delivers toasts broadcast through `broadcaster` as messages.
    ///
    /// The broadcast receiver is created once, when the subscription starts.
    pub fn subscription(broadcaster: &ToastBroadcaster) -> iced::Subscription<ToastMessage> {
        iced::Subscription::run_with(ToastFeed(broadcaster.clone()), |feed: &ToastFeed| {
            let mut receiver = feed.0.subscribe();
            stream::channel(BROADCAST_CAPACITY, move |mut output: iced::futures::channel::mpsc::Sender<ToastMessage>| async move {
                loop {
                    match receiver.recv().await {
                        Ok(record) => {
                            if output.send(ToastMessage::Received(record)).await.is_err() {
                                break;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "toast layer lagged behind broadcasts");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            })
        })
    }

    /// Handles a message and returns the follow-up the host must schedule.
    pub fn update(&mut self, message: ToastMessage, now: Instant) -> Option<Scheduled> {
        self.now = now;
        match message {
            ToastMessage::Received(record) => {
                let id = record.id();
                tracing::debug!(?id, "showing toast");
                self.slot = Some(Shown {
                    record,
                    shown_at: now,
                    hidden_at: None,
                });
                Some(Scheduled {
                    after: self.timing.display,
                    message: ToastMessage::Hide(id),
                })
            }
            ToastMessage::Hide(id) => self.hide(id, now),
            ToastMessage::Discard(id) => {
                if self
                    .slot
                    .as_ref()
                    .is_some_and(|shown| shown.record.id() == id && !shown.is_visible())
                {
                    self.slot = None;
                }
                None
            }
            ToastMessage::Card(OverlayMessage::Tapped(id)) => {
                let record = self
                    .slot
                    .as_ref()
                    .filter(|shown| shown.record.id() == id && shown.is_visible())
                    .map(|shown| shown.record.clone())?;

                let scheduled = if record.dismiss_on_tap() {
                    self.hide(id, now)
                } else {
                    None
                };
                if let Some(handler) = record.tap_handler() {
                    handler();
                }
                scheduled
            }
        }
    }

    fn hide(&mut self, id: NotificationId, now: Instant) -> Option<Scheduled> {
        let shown = self
            .slot
            .as_mut()
            .filter(|shown| shown.record.id() == id && shown.is_visible())?;
        shown.hidden_at = Some(now);
        Some(Scheduled {
            after: self.timing.removal_delay,
            message: ToastMessage::Discard(id),
        })
    }

    /// Advances the animation clock.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    /// True while a toast is on screen; the pulse keeps it animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slot.is_some()
    }

    /// Id of the toast in the slot, visible or hiding.
    #[must_use]
    pub fn current_id(&self) -> Option<NotificationId> {
        self.slot.as_ref().map(|shown| shown.record.id())
    }

    /// True when the slot holds a toast that hasn't started hiding.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.slot.as_ref().is_some_and(Shown::is_visible)
    }

    pub fn view(&self) -> Element<'_, ToastMessage> {
        let stack = Stack::new().width(Length::Fill).height(Length::Fill);
        let Some(shown) = &self.slot else {
            return stack.into();
        };

        let transition = self.timing.transition;
        let (visibility, icon_scale) = match shown.hidden_at {
            None => (
                placement::ease_out_cubic(progress(shown.shown_at, self.now, transition)),
                pulse_scale(
                    self.now.saturating_duration_since(shown.shown_at),
                    self.timing.pulse_period,
                ),
            ),
            Some(hidden_at) => (
                1.0 - placement::ease_out_cubic(progress(hidden_at, self.now, transition)),
                1.0,
            ),
        };

        let style = CardStyle {
            icon_scale,
            interactive: shown.is_visible(),
            ..CardStyle::toast()
        };
        let card = overlay_view::card(&shown.record, style).map(ToastMessage::Card);

        stack
            .push(
                OverlayLayer::new(card, self.surface.placement(&shown.record, CrossAlign::End))
                    .visibility(visibility)
                    .interactive(shown.is_visible()),
            )
            .into()
    }
}

/// Icon scale `elapsed` into a looping pulse of length `period`.
#[must_use]
pub fn pulse_scale(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 1.0;
    }
    let phase = (elapsed.as_secs_f32() % period.as_secs_f32()) / period.as_secs_f32();

    PULSE_KEYFRAMES
        .windows(2)
        .find(|pair| phase <= pair[1].0)
        .map_or(1.0, |pair| {
            let (start, from) = pair[0];
            let (end, to) = pair[1];
            let t = (phase - start) / (end - start);
            from + (to - from) * t
        })
}
