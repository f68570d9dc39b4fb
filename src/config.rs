//! Configuration constants and utilities for lapline
//!
//! Timing knobs for the event loop, overridable per environment. CLI flags
//! take precedence over these; the controller resolves that ordering.

use std::time::Duration;

/// Default display refresh interval while the timer runs, in milliseconds.
/// 16ms keeps the time panel at roughly 60 updates per second.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Environment variable name for overriding the tick interval.
pub const TICK_INTERVAL_ENV_VAR: &str = "LAPLINE_TICK_MS";

/// Bounds applied to any tick interval override.
pub const MIN_TICK_INTERVAL_MS: u64 = 5;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Poll timeout while the timer is not running. Nothing repaints on these
/// timeouts, so the long interval keeps the idle loop quiet.
pub const IDLE_POLL_INTERVAL_MS: u64 = 60_000;

/// Get the tick interval, checking the environment variable first, then
/// falling back to the default. Overrides are clamped to sane bounds.
pub fn tick_interval_ms() -> u64 {
    match std::env::var(TICK_INTERVAL_ENV_VAR) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(ms) => clamp_tick_interval_ms(ms),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring unparseable {}", TICK_INTERVAL_ENV_VAR);
                DEFAULT_TICK_INTERVAL_MS
            }
        },
        Err(_) => DEFAULT_TICK_INTERVAL_MS,
    }
}

pub fn clamp_tick_interval_ms(ms: u64) -> u64 {
    ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
}

pub fn idle_poll_interval() -> Duration {
    Duration::from_millis(IDLE_POLL_INTERVAL_MS)
}
