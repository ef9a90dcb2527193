// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`notifications`] - Toast notification manager and widget
//! - [`menu`] - Disclosure menus with a single open slot
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod menu;
pub mod notifications;
pub mod styles;
pub mod theming;
