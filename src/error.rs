// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Invalid notification: {0}")]
    InvalidNotification(#[from] InvalidNotification),
    /// The HUD lane is no longer running, so the request was not queued.
    #[error("HUD lane is closed")]
    LaneClosed,
}

/// Reasons a notification record is rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidNotification {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("display duration must be greater than zero")]
    NonPositiveDuration,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_notification_converts_and_formats() {
        let err: Error = InvalidNotification::NonPositiveDuration.into();
        assert_eq!(
            err.to_string(),
            "Invalid notification: display duration must be greater than zero"
        );
    }
}
