// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the
//! `Severity`, `Phase` and `Origin` enums used throughout the notification
//! system.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Icon;
use iced::Color;

/// Unique identifier for a notification.
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

/// Severity category; drives the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue, default icon).
    #[default]
    Info,
    /// Operation completed successfully (green, check icon).
    Success,
    /// Something went wrong (red, warning icon).
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Success, Severity::Error];

    /// Returns the icon shown next to the message.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Severity::Success => Icon::Check,
            Severity::Error => Icon::Warning,
            Severity::Info => Icon::Info,
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Parses a flash category such as `success` or `error`.
    ///
    /// Unknown categories fall back to `Info`, matching how an unrecognised
    /// category is rendered with the default icon.
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" | "danger" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Visual state of a notification that is still in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Visible,
    /// Playing the exit transition; removal follows shortly.
    Exiting,
}

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Created at runtime through `Manager::show`.
    Shown,
    /// Already present when the application started.
    Flash,
}

/// A message that existed before the UI started (e.g. from the command line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

impl Flash {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Parses `category:message`. Without a colon the whole string is an
    /// info message.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((category, message)) => Self::new(Severity::from_category(category), message),
            None => Self::new(Severity::Info, raw),
        }
    }
}

/// A notification displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    origin: Origin,
    phase: Phase,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            origin: Origin::Shown,
            phase: Phase::Visible,
        }
    }

    pub(crate) fn from_flash(flash: Flash) -> Self {
        Self {
            origin: Origin::Flash,
            ..Self::new(flash.severity, flash.message)
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.severity.icon()
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    pub(crate) fn begin_exit(&mut self) {
        self.phase = Phase::Exiting;
    }
}
