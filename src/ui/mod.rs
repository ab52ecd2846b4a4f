// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - HUD banners and toasts
//! - [`widgets`] - Custom Iced widgets (overlay layer)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Glyph lookup for notification icons

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod widgets;
