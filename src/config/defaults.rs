// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **HUD**: Cooldown gap between banners
//! - **Transitions**: Slide in/out duration and frame rate
//! - **Toast**: Display time, removal delay and icon pulse period
//! - **Layout**: Margins around overlays

// ==========================================================================
// HUD Defaults
// ==========================================================================

/// Idle gap between one banner's dismissal and the next banner (in milliseconds).
pub const DEFAULT_HUD_COOLDOWN_MS: u64 = 1_100;

/// Minimum HUD cooldown (in milliseconds).
pub const MIN_HUD_COOLDOWN_MS: u64 = 0;

/// Maximum HUD cooldown (in milliseconds).
pub const MAX_HUD_COOLDOWN_MS: u64 = 10_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the slide-in and slide-out transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition duration. Zero disables the animation.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Redraw interval while an overlay is animating (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long a toast stays visible before it starts hiding (in milliseconds).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3_000;

/// Minimum toast display time (in milliseconds).
pub const MIN_TOAST_DISPLAY_MS: u64 = 500;

/// Maximum toast display time (in milliseconds).
pub const MAX_TOAST_DISPLAY_MS: u64 = 30_000;

/// Delay between hiding a toast and discarding its content (in milliseconds).
/// Lets the exit animation finish before the content disappears.
pub const DEFAULT_TOAST_REMOVAL_DELAY_MS: u64 = 500;

/// Minimum toast removal delay (in milliseconds).
pub const MIN_TOAST_REMOVAL_DELAY_MS: u64 = 0;

/// Maximum toast removal delay (in milliseconds).
pub const MAX_TOAST_REMOVAL_DELAY_MS: u64 = 5_000;

/// Period of the toast icon pulse loop (in milliseconds).
pub const DEFAULT_PULSE_PERIOD_MS: u64 = 1_000;

/// Minimum pulse period (in milliseconds).
pub const MIN_PULSE_PERIOD_MS: u64 = 200;

/// Maximum pulse period (in milliseconds).
pub const MAX_PULSE_PERIOD_MS: u64 = 5_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Gap between an overlay and its display edge (in logical pixels).
pub const DEFAULT_EDGE_MARGIN: f32 = 16.0;

/// Minimum edge margin (in logical pixels).
pub const MIN_EDGE_MARGIN: f32 = 0.0;

/// Maximum edge margin (in logical pixels).
pub const MAX_EDGE_MARGIN: f32 = 128.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_HUD_COOLDOWN_MS >= MIN_HUD_COOLDOWN_MS);
    assert!(DEFAULT_HUD_COOLDOWN_MS <= MAX_HUD_COOLDOWN_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_TOAST_DISPLAY_MS >= MIN_TOAST_DISPLAY_MS);
    assert!(DEFAULT_TOAST_DISPLAY_MS <= MAX_TOAST_DISPLAY_MS);
    assert!(DEFAULT_TOAST_REMOVAL_DELAY_MS <= MAX_TOAST_REMOVAL_DELAY_MS);
    assert!(DEFAULT_PULSE_PERIOD_MS >= MIN_PULSE_PERIOD_MS);
    assert!(DEFAULT_PULSE_PERIOD_MS <= MAX_PULSE_PERIOD_MS);
    assert!(FRAME_INTERVAL_MS > 0);
};
