// SPDX-License-Identifier: MPL-2.0
//! Timing parameters for the HUD lane and the toast layer.
//!
//! Values coming from the settings file are clamped into their valid range
//! here, so the lane and the layers never see out-of-range durations.

use crate::config::{self, HudConfig, ToastConfig};
use std::time::Duration;

fn clamped_millis(value: Option<u64>, default: u64, min: u64, max: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).clamp(min, max))
}

/// Timing of the HUD banner lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudTiming {
    /// Idle gap between a banner's dismissal and the next banner.
    pub cooldown: Duration,
    /// Slide transition duration.
    pub transition: Duration,
}

impl HudTiming {
    /// Builds timing from the `[hud]` settings section, clamping each value.
    #[must_use]
    pub fn from_config(hud: &HudConfig) -> Self {
        Self {
            cooldown: clamped_millis(
                hud.cooldown_ms,
                config::DEFAULT_HUD_COOLDOWN_MS,
                config::MIN_HUD_COOLDOWN_MS,
                config::MAX_HUD_COOLDOWN_MS,
            ),
            transition: clamped_millis(
                hud.transition_ms,
                config::DEFAULT_TRANSITION_MS,
                config::MIN_TRANSITION_MS,
                config::MAX_TRANSITION_MS,
            ),
        }
    }
}

impl Default for HudTiming {
    fn default() -> Self {
        Self::from_config(&HudConfig::default())
    }
}

/// Timing of the toast layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Time a toast stays visible before hiding.
    pub display: Duration,
    /// Time between hiding and discarding the content.
    pub removal_delay: Duration,
    /// Period of the icon pulse loop.
    pub pulse_period: Duration,
    /// Slide transition duration.
    pub transition: Duration,
}

impl ToastTiming {
    /// Builds timing from the `[toast]` section. The transition duration is
    /// shared with the HUD.
    #[must_use]
    pub fn from_config(toast: &ToastConfig, hud: &HudConfig) -> Self {
        Self {
            display: clamped_millis(
                toast.display_ms,
                config::DEFAULT_TOAST_DISPLAY_MS,
                config::MIN_TOAST_DISPLAY_MS,
                config::MAX_TOAST_DISPLAY_MS,
            ),
            removal_delay: clamped_millis(
                toast.removal_delay_ms,
                config::DEFAULT_TOAST_REMOVAL_DELAY_MS,
                config::MIN_TOAST_REMOVAL_DELAY_MS,
                config::MAX_TOAST_REMOVAL_DELAY_MS,
            ),
            pulse_period: clamped_millis(
                toast.pulse_period_ms,
                config::DEFAULT_PULSE_PERIOD_MS,
                config::MIN_PULSE_PERIOD_MS,
                config::MAX_PULSE_PERIOD_MS,
            ),
            transition: HudTiming::from_config(hud).transition,
        }
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default(), &HudConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_defaults_match_observed_constants() {
        let timing = HudTiming::default();
        assert_eq!(timing.cooldown, Duration::from_millis(1_100));
        assert_eq!(timing.transition, Duration::from_millis(300));
    }

    #[test]
    fn toast_defaults_match_observed_constants() {
        let timing = ToastTiming::default();
        assert_eq!(timing.display, Duration::from_secs(3));
        assert_eq!(timing.removal_delay, Duration::from_millis(500));
        assert_eq!(timing.pulse_period, Duration::from_secs(1));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let hud = HudConfig {
            cooldown_ms: Some(60_000),
            transition_ms: Some(10_000),
        };
        let timing = HudTiming::from_config(&hud);
        assert_eq!(timing.cooldown, Duration::from_millis(config::MAX_HUD_COOLDOWN_MS));
        assert_eq!(timing.transition, Duration::from_millis(config::MAX_TRANSITION_MS));

        let toast = ToastConfig {
            display_ms: Some(1),
            removal_delay_ms: None,
            pulse_period_ms: Some(10),
        };
        let timing = ToastTiming::from_config(&toast, &HudConfig::default());
        assert_eq!(timing.display, Duration::from_millis(config::MIN_TOAST_DISPLAY_MS));
        assert_eq!(
            timing.removal_delay,
            Duration::from_millis(config::DEFAULT_TOAST_REMOVAL_DELAY_MS)
        );
        assert_eq!(timing.pulse_period, Duration::from_millis(config::MIN_PULSE_PERIOD_MS));
    }
}
