// SPDX-License-Identifier: MPL-2.0
//! Presentation surface for HUD banners.
//!
//! The surface observes the manager's current slot and turns every change
//! into transitions: the new record slides in from its display edge while
//! the previous one slides out toward its own edge. Records are keyed by
//! their id, so two consecutive banners with identical text still play both
//! transitions.
//!
//! The rendered element is meant to be the top-most layer of the host's
//! `Stack`, above any modal sheet, so banners are never dimmed or covered.
//! Only the banner itself is a hit target (see
//! [`OverlayLayer`](crate::ui::widgets::OverlayLayer)).

use super::notification::{Notification, NotificationId};
use super::overlay_view::{self, CardStyle, OverlayMessage};
use super::placement::{self, CrossAlign, Placement, SafeAreaInsets};
use crate::config::{self, Config};
use crate::ui::widgets::OverlayLayer;
use iced::widget::Stack;
use iced::{Element, Length};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Layout and animation parameters shared by every overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    pub insets: SafeAreaInsets,
    pub margin: f32,
    pub transition: Duration,
}

impl SurfaceConfig {
    /// Builds the surface configuration from the settings file.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            insets: config.layout.safe_area.into(),
            margin: config
                .layout
                .edge_margin
                .filter(|margin| margin.is_finite())
                .unwrap_or(config::DEFAULT_EDGE_MARGIN)
                .clamp(config::MIN_EDGE_MARGIN, config::MAX_EDGE_MARGIN),
            transition: super::HudTiming::from_config(&config.hud).transition,
        }
    }

    /// Placement of `record` with the given cross-axis alignment.
    #[must_use]
    pub fn placement(&self, record: &Notification, cross_align: CrossAlign) -> Placement {
        Placement {
            edge: record.display_edge(),
            insets: self.insets,
            ignores_safe_area: record.ignores_safe_area(),
            margin: self.margin,
            cross_align,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Fraction of `transition` elapsed since `since`, in [0, 1].
pub(super) fn progress(since: Instant, now: Instant, transition: Duration) -> f32 {
    if transition.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / transition.as_secs_f32()).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Entering,
    /// Sliding out, starting from the visibility it had when it was replaced.
    Exiting { from: f32 },
}

/// A record currently on screen, with its transition state.
#[derive(Debug, Clone)]
struct Mounted {
    record: Notification,
    phase: Phase,
    since: Instant,
}

impl Mounted {
    fn entering(record: Notification, now: Instant) -> Self {
        Self {
            record,
            phase: Phase::Entering,
            since: now,
        }
    }

    fn into_exiting(self, now: Instant, transition: Duration) -> Self {
        let from = self.visibility(now, transition);
        Self {
            record: self.record,
            phase: Phase::Exiting { from },
            since: now,
        }
    }

    fn visibility(&self, now: Instant, transition: Duration) -> f32 {
        let eased = placement::ease_out_cubic(progress(self.since, now, transition));
        match self.phase {
            Phase::Entering => eased,
            Phase::Exiting { from } => from * (1.0 - eased),
        }
    }

    fn is_settled(&self, now: Instant, transition: Duration) -> bool {
        progress(self.since, now, transition) >= 1.0
    }
}

/// Renders the manager's current record above the rest of the application.
#[derive(Debug)]
pub struct Surface {
    receiver: watch::Receiver<Option<Notification>>,
    config: SurfaceConfig,
    entering: Option<Mounted>,
    exiting: Vec<Mounted>,
    now: Instant,
}

impl Surface {
    /// Binds a surface to a manager's slot (see
    /// [`Manager::subscribe`](super::Manager::subscribe)).
    #[must_use]
    pub fn new(receiver: watch::Receiver<Option<Notification>>, config: SurfaceConfig) -> Self {
        Self {
            receiver,
            config,
            entering: None,
            exiting: Vec::new(),
            now: Instant::now(),
        }
    }

    /// Picks up a change of the observed slot.
    ///
    /// Returns `true` if a transition started.
    pub fn refresh(&mut self, now: Instant) -> bool {
        self.now = now;
        if !matches!(self.receiver.has_changed(), Ok(true)) {
            return false;
        }
        let current = self.receiver.borrow_and_update().clone();
        self.mount(current, now)
    }

    fn mount(&mut self, current: Option<Notification>, now: Instant) -> bool {
        let current_id = current.as_ref().map(Notification::id);
        if self.entering_id() == current_id {
            return false;
        }

        if let Some(previous) = self.entering.take() {
            tracing::trace!(id = ?previous.record.id(), "banner exit transition");
            self.exiting
                .push(previous.into_exiting(now, self.config.transition));
        }
        self.entering = current.map(|record| Mounted::entering(record, now));
        true
    }

    /// Advances the animation clock and drops finished exits.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        let transition = self.config.transition;
        self.exiting
            .retain(|mounted| !mounted.is_settled(now, transition));
    }

    /// True while any transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let transition = self.config.transition;
        !self.exiting.is_empty()
            || self
                .entering
                .as_ref()
                .is_some_and(|mounted| !mounted.is_settled(self.now, transition))
    }

    /// True when nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entering.is_none() && self.exiting.is_empty()
    }

    /// Id of the record sliding in or resting on screen.
    #[must_use]
    pub fn entering_id(&self) -> Option<NotificationId> {
        self.entering.as_ref().map(|mounted| mounted.record.id())
    }

    /// Ids of the records still sliding out, oldest first.
    #[must_use]
    pub fn exiting_ids(&self) -> Vec<NotificationId> {
        self.exiting
            .iter()
            .map(|mounted| mounted.record.id())
            .collect()
    }

    /// Renders every mounted record. Exiting banners are drawn but no longer
    /// accept taps.
    pub fn view(&self) -> Element<'_, OverlayMessage> {
        let transition = self.config.transition;
        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

        for mounted in &self.exiting {
            let style = CardStyle {
                interactive: false,
                ..CardStyle::hud()
            };
            stack = stack.push(
                OverlayLayer::new(
                    overlay_view::card(&mounted.record, style),
                    self.config.placement(&mounted.record, CrossAlign::Center),
                )
                .visibility(mounted.visibility(self.now, transition))
                .interactive(false),
            );
        }

        if let Some(mounted) = &self.entering {
            stack = stack.push(
                OverlayLayer::new(
                    overlay_view::card(&mounted.record, CardStyle::hud()),
                    self.config.placement(&mounted.record, CrossAlign::Center),
                )
                .visibility(mounted.visibility(self.now, transition)),
            );
        }

        stack.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{DisplayEdge, LaneEvent, Manager, Severity};

    fn setup() -> (Manager, Surface) {
        let manager = Manager::default();
        let surface = Surface::new(manager.subscribe(), SurfaceConfig::default());
        (manager, surface)
    }

    fn banner(message: &str) -> Notification {
        Notification::success(message).unwrap()
    }

    #[test]
    fn empty_surface_renders_nothing() {
        let (_manager, mut surface) = setup();
        assert!(!surface.refresh(Instant::now()));
        assert!(surface.is_empty());
        assert!(!surface.is_animating());
        let _ = surface.view();
    }

    #[test]
    fn new_record_slides_in() {
        let (mut manager, mut surface) = setup();
        let record = banner("Saved");
        let id = record.id();
        let start = Instant::now();

        manager.apply(LaneEvent::Present(record));
        assert!(surface.refresh(start));
        assert_eq!(surface.entering_id(), Some(id));
        assert!(surface.is_animating());

        surface.tick(start + Duration::from_secs(1));
        assert!(!surface.is_animating());
    }

    #[test]
    fn cleared_record_slides_out_then_unmounts() {
        let (mut manager, mut surface) = setup();
        let record = banner("Saved");
        let id = record.id();
        let start = Instant::now();

        manager.apply(LaneEvent::Present(record));
        surface.refresh(start);
        manager.remove(id);
        assert!(surface.refresh(start + Duration::from_secs(3)));

        assert_eq!(surface.entering_id(), None);
        assert_eq!(surface.exiting_ids(), vec![id]);

        surface.tick(start + Duration::from_secs(4));
        assert!(surface.is_empty());
    }

    #[test]
    fn identical_text_still_replays_transitions() {
        let (mut manager, mut surface) = setup();
        let first = banner("Saved");
        let second = banner("Saved");
        let (first_id, second_id) = (first.id(), second.id());
        let start = Instant::now();

        manager.apply(LaneEvent::Present(first));
        surface.refresh(start);
        manager.apply(LaneEvent::Present(second));
        assert!(surface.refresh(start + Duration::from_millis(50)));

        assert_eq!(surface.entering_id(), Some(second_id));
        assert_eq!(surface.exiting_ids(), vec![first_id]);
    }

    #[test]
    fn interrupted_entrance_exits_from_partial_visibility() {
        let record = banner("Saved");
        let start = Instant::now();
        let transition = Duration::from_millis(300);

        let mounted = Mounted::entering(record, start);
        let midway = start + Duration::from_millis(100);
        let partial = mounted.visibility(midway, transition);
        let exiting = mounted.into_exiting(midway, transition);

        assert!(partial > 0.0 && partial < 1.0);
        assert_eq!(exiting.visibility(midway, transition), partial);
        assert_eq!(exiting.visibility(midway + transition, transition), 0.0);
    }

    #[test]
    fn unchanged_slot_does_not_restart_transition() {
        let (mut manager, mut surface) = setup();
        let start = Instant::now();
        manager.apply(LaneEvent::Present(banner("Saved")));
        assert!(surface.refresh(start));
        assert!(!surface.refresh(start + Duration::from_millis(10)));
    }

    #[test]
    fn zero_transition_settles_immediately() {
        let start = Instant::now();
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
    }

    #[test]
    fn placement_follows_record() {
        let config = SurfaceConfig::default();
        let record = Notification::builder(Severity::Info, "Hello")
            .edge(DisplayEdge::Leading)
            .ignores_safe_area(true)
            .build()
            .unwrap();
        let placement = config.placement(&record, CrossAlign::Center);
        assert_eq!(placement.edge, DisplayEdge::Leading);
        assert!(placement.ignores_safe_area);
        assert_eq!(placement.margin, config::DEFAULT_EDGE_MARGIN);
    }

    #[test]
    fn non_finite_margin_falls_back_to_default() {
        for margin in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut settings = Config::default();
            settings.layout.edge_margin = Some(margin);
            assert_eq!(
                SurfaceConfig::from_config(&settings).margin,
                config::DEFAULT_EDGE_MARGIN
            );
        }
    }

    #[test]
    fn out_of_range_margin_is_clamped() {
        let mut settings = Config::default();
        settings.layout.edge_margin = Some(-5.0);
        assert_eq!(SurfaceConfig::from_config(&settings).margin, config::MIN_EDGE_MARGIN);
    }

    #[test]
    fn view_builds_while_animating() {
        let (mut manager, mut surface) = setup();
        let start = Instant::now();
        manager.apply(LaneEvent::Present(banner("one")));
        surface.refresh(start);
        manager.apply(LaneEvent::Present(banner("two")));
        surface.refresh(start + Duration::from_millis(20));
        let _ = surface.view();
    }
}
