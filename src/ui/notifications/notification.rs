// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record, its builder and
//! the small enums describing where and how it is presented.

use crate::error::{InvalidNotification, Result};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids come from a monotonic counter and are never derived from content, so
/// two records with the same text are still distinct on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity of a notification. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the display duration used when the caller doesn't set one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning | Severity::Error => Duration::from_secs(5),
        }
    }
}

/// Screen edge a notification enters from and exits toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayEdge {
    #[default]
    Top,
    Bottom,
    /// Left edge (left-to-right layout).
    Leading,
    /// Right edge (left-to-right layout).
    Trailing,
}

impl DisplayEdge {
    /// True for edges along the top or bottom of the window.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, DisplayEdge::Top | DisplayEdge::Bottom)
    }

    /// Unit vector pointing off-screen through this edge.
    #[must_use]
    pub fn outward(self) -> (f32, f32) {
        match self {
            DisplayEdge::Top => (0.0, -1.0),
            DisplayEdge::Bottom => (0.0, 1.0),
            DisplayEdge::Leading => (-1.0, 0.0),
            DisplayEdge::Trailing => (1.0, 0.0),
        }
    }
}

/// Callback run when the user taps a notification.
pub type TapHandler = Arc<dyn Fn() + Send + Sync>;

/// A notification to be displayed to the user.
///
/// Records are immutable once built; changes are expressed by building a new
/// record. Use [`Notification::builder`] or the severity shortcuts.
#[derive(Clone)]
pub struct Notification {
    id: NotificationId,
    title: Option<String>,
    message: String,
    system_image: Option<String>,
    display_edge: DisplayEdge,
    ignores_safe_area: bool,
    severity: Severity,
    display_duration: Duration,
    dismiss_on_tap: bool,
    tap_handler: Option<TapHandler>,
}

impl Notification {
    /// Starts building a notification with the given severity and message.
    pub fn builder(severity: Severity, message: impl Into<String>) -> NotificationBuilder {
        NotificationBuilder {
            title: None,
            message: message.into(),
            system_image: None,
            display_edge: DisplayEdge::default(),
            ignores_safe_area: false,
            severity,
            display_duration: severity.default_duration(),
            dismiss_on_tap: true,
            tap_handler: None,
        }
    }

    /// Creates a success notification with default presentation.
    pub fn success(message: impl Into<String>) -> Result<Self> {
        Self::builder(Severity::Success, message).build()
    }

    /// Creates an info notification with default presentation.
    pub fn info(message: impl Into<String>) -> Result<Self> {
        Self::builder(Severity::Info, message).build()
    }

    /// Creates a warning notification with default presentation.
    pub fn warning(message: impl Into<String>) -> Result<Self> {
        Self::builder(Severity::Warning, message).build()
    }

    /// Creates an error notification with default presentation.
    pub fn error(message: impl Into<String>) -> Result<Self> {
        Self::builder(Severity::Error, message).build()
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the opaque icon name, if any.
    #[must_use]
    pub fn system_image(&self) -> Option<&str> {
        self.system_image.as_deref()
    }

    #[must_use]
    pub fn display_edge(&self) -> DisplayEdge {
        self.display_edge
    }

    #[must_use]
    pub fn ignores_safe_area(&self) -> bool {
        self.ignores_safe_area
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    #[must_use]
    pub fn dismiss_on_tap(&self) -> bool {
        self.dismiss_on_tap
    }

    #[must_use]
    pub fn tap_handler(&self) -> Option<&TapHandler> {
        self.tap_handler.as_ref()
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("system_image", &self.system_image)
            .field("display_edge", &self.display_edge)
            .field("ignores_safe_area", &self.ignores_safe_area)
            .field("severity", &self.severity)
            .field("display_duration", &self.display_duration)
            .field("dismiss_on_tap", &self.dismiss_on_tap)
            .field("has_tap_handler", &self.tap_handler.is_some())
            .finish()
    }
}

/// Builder for [`Notification`]. Validation happens in [`build`](Self::build).
#[must_use]
pub struct NotificationBuilder {
    title: Option<String>,
    message: String,
    system_image: Option<String>,
    display_edge: DisplayEdge,
    ignores_safe_area: bool,
    severity: Severity,
    display_duration: Duration,
    dismiss_on_tap: bool,
    tap_handler: Option<TapHandler>,
}

impl NotificationBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the icon name. The name is opaque to the notification system.
    pub fn system_image(mut self, name: impl Into<String>) -> Self {
        self.system_image = Some(name.into());
        self
    }

    pub fn edge(mut self, edge: DisplayEdge) -> Self {
        self.display_edge = edge;
        self
    }

    /// Lets the content extend into the safe-area inset of its edge.
    pub fn ignores_safe_area(mut self, ignores: bool) -> Self {
        self.ignores_safe_area = ignores;
        self
    }

    /// Overrides the severity's default display duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.display_duration = duration;
        self
    }

    pub fn dismiss_on_tap(mut self, dismiss: bool) -> Self {
        self.dismiss_on_tap = dismiss;
        self
    }

    pub fn on_tap(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.tap_handler = Some(Arc::new(handler));
        self
    }

    /// Validates the fields and assigns a fresh id.
    ///
    /// # Errors
    ///
    /// Rejects an empty message and a zero display duration.
    pub fn build(self) -> Result<Notification> {
        if self.message.trim().is_empty() {
            return Err(InvalidNotification::EmptyMessage.into());
        }
        if self.display_duration.is_zero() {
            return Err(InvalidNotification::NonPositiveDuration.into());
        }

        Ok(Notification {
            id: NotificationId::new(),
            title: self.title,
            message: self.message,
            system_image: self.system_image,
            display_edge: self.display_edge,
            ignores_safe_area: self.ignores_safe_area,
            severity: self.severity,
            display_duration: self.display_duration,
            dismiss_on_tap: self.dismiss_on_tap,
            tap_handler: self.tap_handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test").unwrap();
        let n2 = Notification::success("test").unwrap();
        assert_ne!(n1.id(), n2.id());
        assert_ne!(n1, n2);
    }

    #[test]
    fn ids_increase_monotonically() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second > first);
    }

    #[test]
    fn clones_share_identity() {
        let n = Notification::info("hello").unwrap();
        assert_eq!(n.clone(), n);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert!(Severity::Warning.default_duration() > Severity::Success.default_duration());
    }

    #[test]
    fn builder_sets_every_field() {
        let notification = Notification::builder(Severity::Warning, "Low storage")
            .title("Storage")
            .system_image("externaldrive")
            .edge(DisplayEdge::Bottom)
            .ignores_safe_area(true)
            .duration(Duration::from_millis(1500))
            .dismiss_on_tap(false)
            .on_tap(|| {})
            .build()
            .unwrap();

        assert_eq!(notification.title(), Some("Storage"));
        assert_eq!(notification.message(), "Low storage");
        assert_eq!(notification.system_image(), Some("externaldrive"));
        assert_eq!(notification.display_edge(), DisplayEdge::Bottom);
        assert!(notification.ignores_safe_area());
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.display_duration(), Duration::from_millis(1500));
        assert!(!notification.dismiss_on_tap());
        assert!(notification.tap_handler().is_some());
    }

    #[test]
    fn builder_defaults() {
        let notification = Notification::success("Saved").unwrap();
        assert_eq!(notification.display_edge(), DisplayEdge::Top);
        assert!(!notification.ignores_safe_area());
        assert!(notification.dismiss_on_tap());
        assert!(notification.tap_handler().is_none());
        assert_eq!(notification.display_duration(), Duration::from_secs(3));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let result = Notification::builder(Severity::Info, "Saved")
            .duration(Duration::ZERO)
            .build();
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidNotification(InvalidNotification::NonPositiveDuration)
        );
    }

    #[test]
    fn blank_message_is_rejected() {
        assert_eq!(
            Notification::info("   ").unwrap_err(),
            Error::InvalidNotification(InvalidNotification::EmptyMessage)
        );
    }

    #[test]
    fn tap_handler_is_shared_between_clones() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let notification = Notification::builder(Severity::Info, "Tap me")
            .on_tap(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        let copy = notification.clone();
        (notification.tap_handler().unwrap())();
        (copy.tap_handler().unwrap())();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn edges_point_outward() {
        assert_eq!(DisplayEdge::Top.outward(), (0.0, -1.0));
        assert_eq!(DisplayEdge::Trailing.outward(), (1.0, 0.0));
        assert!(DisplayEdge::Bottom.is_vertical());
        assert!(!DisplayEdge::Leading.is_vertical());
    }
}
