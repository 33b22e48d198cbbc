//! Wall-clock time sources.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock timestamps in milliseconds since the Unix epoch.
///
/// Abstracting the clock lets tests pin time instead of racing the system
/// clock.
///
/// # Example
///
/// ```
/// use cuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

/// A [`TimeSource`] backed by [`SystemTime::now`].
///
/// Identifiers encode real epoch milliseconds, so wall-clock time is the
/// right source here even though it can step backwards under clock
/// adjustments; ordering across such a step is already outside the format's
/// guarantees.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_a_plausible_epoch_offset() {
        // 2020-01-01T00:00:00Z; anything earlier means the clock is broken.
        assert!(SystemClock.current_millis() > 1_577_836_800_000);
    }
}
