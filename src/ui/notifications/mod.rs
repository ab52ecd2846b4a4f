// SPDX-License-Identifier: MPL-2.0
//! Transient notification overlays.
//!
//! Two delivery mechanisms share the same record, card and placement:
//!
//! - **HUD banners**: queued through a [`Manager`] (or a cloneable
//!   [`HudHandle`]), shown one at a time in call order, each for its own
//!   duration, separated by a short cooldown. A [`Surface`] observes the
//!   manager's current slot and renders slide transitions.
//! - **Toasts**: announced through a [`ToastBroadcaster`] and shown by a
//!   [`ToastLayer`]. The last broadcast wins the single slot.
//!
//! # Components
//!
//! - [`notification`] - Immutable `Notification` record and its builder
//! - [`manager`] - Current-slot ownership, removal and tap handling
//! - [`lane`] - Serial presentation queue with per-record timers
//! - [`placement`] - Edge placement, safe-area padding and hit testing
//! - [`surface`] - Top-most HUD layer with enter/exit transitions
//! - [`overlay_view`] - Card widget for a single record
//! - [`toast`] - Broadcast-driven toast layer
//!
//! # Usage
//!
//! ```ignore
//! use iced_hud::ui::notifications::{Manager, Notification, Surface, SurfaceConfig};
//!
//! let manager = Manager::default();
//! let surface = Surface::new(manager.subscribe(), SurfaceConfig::default());
//!
//! manager.show(Notification::success("Saved")?)?;
//!
//! // subscription: manager.subscription().map(Message::Hud)
//! // update:       manager.apply(event); surface.refresh(Instant::now());
//! // view:         stack![content, surface.view().map(Message::HudOverlay)]
//! ```

pub mod lane;
pub mod manager;
pub mod notification;
pub mod overlay_view;
pub mod placement;
pub mod surface;
pub mod toast;
mod timing;

pub use lane::{Lane, LaneEvent};
pub use manager::{HudHandle, Manager};
pub use notification::{
    DisplayEdge, Notification, NotificationBuilder, NotificationId, Severity, TapHandler,
};
pub use overlay_view::{card, CardStyle, OverlayMessage};
pub use placement::{CrossAlign, HitTarget, Placement, SafeAreaInsets};
pub use surface::{Surface, SurfaceConfig};
pub use timing::{HudTiming, ToastTiming};
pub use toast::{pulse_scale, Scheduled, ToastBroadcaster, ToastLayer, ToastMessage};
