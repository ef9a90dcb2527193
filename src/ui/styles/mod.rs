// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the demo surfaces.

pub mod button;
pub mod container;
