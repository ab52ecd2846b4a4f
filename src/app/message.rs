// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{DisplayEdge, LaneEvent, OverlayMessage, ToastMessage};
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Event from the HUD lane.
    Hud(LaneEvent),
    /// Interaction with a HUD banner.
    HudOverlay(OverlayMessage),
    Toast(ToastMessage),
    /// Animation frame while an overlay is moving.
    Frame(Instant),
    /// Queue a banner at the given edge.
    ShowBanner(DisplayEdge),
    /// Queue several banners at once to show serial presentation.
    ShowBurst,
    BroadcastToast,
    ToggleSheet,
    /// Press on the primary content, to show taps pass through overlays.
    PrimaryPressed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file to load instead of the default location.
    pub config_path: Option<PathBuf>,
}
