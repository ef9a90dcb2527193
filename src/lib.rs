// SPDX-License-Identifier: MPL-2.0
//! `iced_flash` provides transient toast notifications and single-open
//! disclosure menus for applications built with the Iced GUI framework.
//!
//! The reusable parts live in [`ui::notifications`] and [`ui::menu`]; the
//! [`app`] module is a small demo window wiring them together.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
