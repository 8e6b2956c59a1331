use crate::TimeSource;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Unlike a monotonic timer, this clock follows wall-clock adjustments (NTP
/// steps, manual changes). Generators tolerate that: a reading that does not
/// advance past the last issued timestamp is bumped forward and the clock
/// sequence is incremented instead.
///
/// A wall clock set before 1970 reads as `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_current_unix_millis() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let now = SystemClock.current_millis();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;

        assert!(before <= now && now <= after);
    }
}
