// SPDX-License-Identifier: MPL-2.0
//! Glyph icons for notifications.
//!
//! Icon names on a notification are opaque strings. Known names map to a
//! Unicode glyph; unknown names fall back to the severity glyph so a typo
//! never renders as raw text.

use crate::ui::notifications::Severity;

/// Resolves a notification's icon name to a glyph.
#[must_use]
pub fn glyph(system_image: Option<&str>, severity: Severity) -> &'static str {
    system_image
        .and_then(named)
        .unwrap_or_else(|| severity_glyph(severity))
}

/// Glyph for a known icon name.
#[must_use]
pub fn named(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "checkmark" | "checkmark.circle" => "✓",
        "info" | "info.circle" => "ℹ",
        "warning" | "exclamationmark.triangle" => "⚠",
        "xmark" | "xmark.circle" => "✕",
        "bell" => "🔔",
        "star" => "★",
        "heart" => "♥",
        "arrow.uturn.backward" | "undo" => "↶",
        "trash" => "🗑",
        "envelope" => "✉",
        _ => return None,
    };
    Some(glyph)
}

/// Default glyph for a severity level.
#[must_use]
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "✕",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(glyph(Some("bell"), Severity::Info), "🔔");
        assert_eq!(glyph(Some("undo"), Severity::Error), "↶");
    }

    #[test]
    fn unknown_names_fall_back_to_severity() {
        assert_eq!(glyph(Some("no.such.icon"), Severity::Warning), "⚠");
        assert_eq!(glyph(None, Severity::Success), "✓");
    }

    #[test]
    fn severity_glyphs_are_distinct() {
        let glyphs = [
            severity_glyph(Severity::Success),
            severity_glyph(Severity::Info),
            severity_glyph(Severity::Warning),
            severity_glyph(Severity::Error),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
