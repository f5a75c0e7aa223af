// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Backend location and request timeout
//! - **Notifications**: Toast lifetimes

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the studio backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of success, info and warning notifications (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 4500;

/// Lifetime of error notifications (milliseconds).
pub const DEFAULT_ERROR_DURATION_MS: i64 = 7000;

/// Interval of the tick that fires notification timers (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_API_TIMEOUT_SECS > 0);
    assert!(MAX_API_TIMEOUT_SECS >= MIN_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS >= MIN_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);

    assert!(DEFAULT_NOTIFICATION_DURATION_MS > 0);
    assert!(DEFAULT_ERROR_DURATION_MS > DEFAULT_NOTIFICATION_DURATION_MS);
    assert!((NOTIFICATION_TICK_MS as i64) < DEFAULT_NOTIFICATION_DURATION_MS);
};
