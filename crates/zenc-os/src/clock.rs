//! Wall and monotonic clocks as floating seconds.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

static MONOTONIC_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Seconds on a clock that never goes backwards within this process.
///
/// The origin is the first call, so only differences between two readings
/// are meaningful. Unaffected by wall-clock adjustments.
pub fn monotonic_time() -> f64 {
    MONOTONIC_ORIGIN
        .get_or_init(Instant::now)
        .elapsed()
        .as_secs_f64()
}

/// Seconds since the Unix epoch, with sub-second precision.
///
/// A system clock set before 1970 reads as `0.0`.
pub fn wall_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_never_decreases() {
        let mut last = monotonic_time();
        for _ in 0..1000 {
            let now = monotonic_time();
            assert!(now >= last, "{now} < {last}");
            last = now;
        }
    }

    #[test]
    fn monotonic_measures_sleep() {
        let start = monotonic_time();
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(monotonic_time() - start >= 0.015);
    }

    #[test]
    fn wall_time_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(wall_time() > 1_577_836_800.0);
    }
}
