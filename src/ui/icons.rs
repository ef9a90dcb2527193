// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `rust-embed` from `assets/icons/`
//! and handles are cached using `OnceLock`, so each file is parsed once.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = button(icons::sized(icons::cross(), sizing::ICON_SM));
//! ```
//!
//! Icons use generic visual names describing their appearance, not the
//! action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// Every icon shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Check,
    Warning,
    Info,
    Cross,
    EllipsisVertical,
}

impl Icon {
    pub const ALL: [Icon; 5] = [
        Icon::Check,
        Icon::Warning,
        Icon::Info,
        Icon::Cross,
        Icon::EllipsisVertical,
    ];

    /// File name inside `assets/icons/`.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Check => "check.svg",
            Icon::Warning => "warning.svg",
            Icon::Info => "info.svg",
            Icon::Cross => "cross.svg",
            Icon::EllipsisVertical => "ellipsis_vertical.svg",
        }
    }

    /// Builds the widget for this icon.
    #[must_use]
    pub fn svg<'a>(self) -> Svg<'a> {
        match self {
            Icon::Check => check(),
            Icon::Warning => warning(),
            Icon::Info => info(),
            Icon::Cross => cross(),
            Icon::EllipsisVertical => ellipsis_vertical(),
        }
    }
}

fn load_handle(file_name: &str) -> Handle {
    match IconAssets::get(file_name) {
        Some(file) => Handle::from_memory(file.data),
        None => {
            log::warn!("icon asset {file_name} is missing, rendering empty");
            Handle::from_memory(Vec::<u8>::new())
        }
    }
}

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function whose handle is created once on first access
/// and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| load_handle($filename));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    check,
    "check.svg",
    "Check icon: circled tick mark for success."
);
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: circled exclamation mark."
);
define_icon!(info, "info.svg", "Info icon: circled lowercase i.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");

// =============================================================================
// Menu Icons
// =============================================================================

define_icon!(
    ellipsis_vertical,
    "ellipsis_vertical.svg",
    "Vertical ellipsis: three stacked dots (kebab menu trigger)."
);

/// Applies a square size to an icon.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
