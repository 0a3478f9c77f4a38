//! Delay helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the card-search polling
//! cadence and provide a small conversion helper so tests and code can
//! express delays in milliseconds clearly.

use std::time::Duration;

/// Delay between card-search polling rounds in milliseconds (5 Hz).
pub const DEFAULT_SEARCH_DELAY_MS: u32 = 200;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default search delay as Duration.
pub fn default_search_delay() -> Duration {
    ms(DEFAULT_SEARCH_DELAY_MS as u64)
}
