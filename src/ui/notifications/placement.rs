// SPDX-License-Identifier: MPL-2.0
//! Overlay geometry: where a notification sits, how it slides, and what a
//! pointer at a given position hits.
//!
//! Everything here is pure math on window-relative logical pixels, so the
//! presentation layer stays a thin adapter over these functions.

use super::notification::DisplayEdge;
use crate::config::SafeAreaConfig;
use iced::{Point, Rectangle, Size};

/// Insets the host reserves on each side of the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl SafeAreaInsets {
    /// Returns the inset on the side of `edge`.
    #[must_use]
    pub fn on(&self, edge: DisplayEdge) -> f32 {
        match edge {
            DisplayEdge::Top => self.top,
            DisplayEdge::Bottom => self.bottom,
            DisplayEdge::Leading => self.left,
            DisplayEdge::Trailing => self.right,
        }
    }
}

impl From<SafeAreaConfig> for SafeAreaInsets {
    fn from(config: SafeAreaConfig) -> Self {
        Self {
            top: config.top.max(0.0),
            bottom: config.bottom.max(0.0),
            left: config.left.max(0.0),
            right: config.right.max(0.0),
        }
    }
}

/// Alignment of an overlay along its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAlign {
    /// Centered along the edge (HUD banners).
    #[default]
    Center,
    /// Pushed to the far end of the edge, i.e. a corner (toasts).
    End,
}

/// Everything needed to place one overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub edge: DisplayEdge,
    pub insets: SafeAreaInsets,
    pub ignores_safe_area: bool,
    pub margin: f32,
    pub cross_align: CrossAlign,
}

/// Padding applied on the safe-area side of the content.
///
/// When the record ignores the safe area this is the negated inset, so the
/// content bleeds into the inset by exactly its size; otherwise the inset
/// stays reserved and no extra padding is applied.
#[must_use]
pub fn safe_area_padding(edge: DisplayEdge, insets: &SafeAreaInsets, ignores_safe_area: bool) -> f32 {
    if ignores_safe_area {
        -insets.on(edge)
    } else {
        0.0
    }
}

/// Distance between the window edge and the resting content.
fn resting_gap(placement: &Placement) -> f32 {
    placement.insets.on(placement.edge)
        + safe_area_padding(placement.edge, &placement.insets, placement.ignores_safe_area)
        + placement.margin
}

/// Computes the bounds of `content` inside a `window`.
///
/// `visibility` runs from 0.0 (fully pushed out through the display edge)
/// to 1.0 (resting position); values outside that range are clamped.
#[must_use]
pub fn place(window: Size, content: Size, placement: &Placement, visibility: f32) -> Rectangle {
    let insets = placement.insets;
    let gap = resting_gap(placement);

    let cross_x = match placement.cross_align {
        CrossAlign::Center => insets.left + (window.width - insets.left - insets.right - content.width) / 2.0,
        CrossAlign::End => window.width - insets.right - placement.margin - content.width,
    };
    let cross_y = match placement.cross_align {
        CrossAlign::Center => insets.top + (window.height - insets.top - insets.bottom - content.height) / 2.0,
        CrossAlign::End => window.height - insets.bottom - placement.margin - content.height,
    };

    let (rest, extent) = match placement.edge {
        DisplayEdge::Top => (Point::new(cross_x, gap), content.height),
        DisplayEdge::Bottom => (
            Point::new(cross_x, window.height - gap - content.height),
            content.height,
        ),
        DisplayEdge::Leading => (Point::new(gap, cross_y), content.width),
        DisplayEdge::Trailing => (
            Point::new(window.width - gap - content.width, cross_y),
            content.width,
        ),
    };

    let hidden = 1.0 - visibility.clamp(0.0, 1.0);
    let travel = (gap + extent) * hidden;
    let (dx, dy) = placement.edge.outward();

    Rectangle {
        x: rest.x + dx * travel,
        y: rest.y + dy * travel,
        width: content.width,
        height: content.height,
    }
}

/// What a pointer at some position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The rendered overlay itself.
    Overlay,
    /// Whatever lies beneath the overlay layer.
    PassThrough,
}

/// Resolves a pointer position against the rendered overlay bounds.
///
/// Only the overlay's own bounds are a target; the rest of the layer, and
/// the whole layer when nothing is shown, passes through.
#[must_use]
pub fn hit_test(point: Point, overlay: Option<Rectangle>) -> HitTarget {
    match overlay {
        Some(bounds) if bounds.contains(point) => HitTarget::Overlay,
        _ => HitTarget::PassThrough,
    }
}

/// Ease-out cubic, used for the slide transitions.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
