// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for default values used
//! across the crate.

// ==========================================================================
// Notification Timing Defaults
// ==========================================================================

/// Time a notification stays fully visible before it starts exiting (ms).
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 5_000;

/// Minimum configurable dismiss delay (ms).
pub const MIN_DISMISS_DELAY_MS: u64 = 500;

/// Maximum configurable dismiss delay (ms).
pub const MAX_DISMISS_DELAY_MS: u64 = 60_000;

/// Length of the exit transition before removal (ms).
pub const DEFAULT_EXIT_DURATION_MS: u64 = 300;

/// Maximum configurable exit transition (ms). Zero removes at once.
pub const MAX_EXIT_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Subscription Defaults
// ==========================================================================

/// Interval of the clock tick that drives notification timers (ms).
pub const TICK_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(MIN_DISMISS_DELAY_MS <= DEFAULT_DISMISS_DELAY_MS);
    assert!(DEFAULT_DISMISS_DELAY_MS <= MAX_DISMISS_DELAY_MS);
    assert!(DEFAULT_EXIT_DURATION_MS <= MAX_EXIT_DURATION_MS);
    assert!(TICK_INTERVAL_MS < DEFAULT_EXIT_DURATION_MS);
};
