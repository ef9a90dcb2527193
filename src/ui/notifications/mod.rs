// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct, `Severity` and lifecycle `Phase`
//! - [`manager`] - `Manager` for the container and auto-dismiss timers
//! - [`toast`] - Toast widget rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Severity, Toast};
//!
//! let mut manager = Manager::new();
//! manager.show("Saved successfully", Severity::Success);
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Lifecycle
//!
//! Every notification exits 5 s after it is created and is removed 300 ms
//! later. The close button removes it at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Timing};
pub use notification::{Flash, Notification, NotificationId, Origin, Phase, Severity};
pub use toast::Toast;
