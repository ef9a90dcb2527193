// SPDX-License-Identifier: MPL-2.0
//! Disclosure menus with a single open slot.
//!
//! - [`controller`] - `Controller` state machine (toggle, outside click)
//! - [`view`] - trigger button and dropdown rendering
//!
//! Presses anywhere in the window are forwarded as
//! [`Message::PointerPressed`]; the controller closes every menu unless the
//! pointer is inside a menu container.

mod controller;
mod view;

pub use controller::{ClickTarget, Controller, Event, Menu, MenuId, MenuItem, Message};
pub use view::{view, view_menu};
