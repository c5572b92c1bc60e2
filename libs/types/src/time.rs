//! Wall-clock helpers
//!
//! Timestamps are Unix nanoseconds as `i64` everywhere. Tests that need
//! determinism pass their own values instead of calling this.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix nanoseconds
pub fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
