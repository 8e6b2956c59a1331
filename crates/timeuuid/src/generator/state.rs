use crate::{TimeSource, Uuid, ticks_since_uuid_epoch};

/// The mutable part of every generator: the last issued timestamp and the
/// clock sequence committed with it.
///
/// Packs into a `u128` as `timestamp << 64 | clock_seq` so the atomic
/// generator can commit both fields with a single compare-and-set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClockState {
    pub(crate) timestamp: u64,
    pub(crate) clock_seq: u16,
}

impl ClockState {
    /// Last issued timestamp, in 100-nanosecond ticks since the UUID epoch.
    /// `0` until the first UUID is issued.
    #[must_use]
    pub const fn last_timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Current 14-bit clock sequence.
    #[must_use]
    pub const fn clock_sequence(&self) -> u16 {
        self.clock_seq
    }

    pub(crate) const fn new(timestamp: u64, clock_seq: u16) -> Self {
        Self {
            timestamp,
            clock_seq: clock_seq & Uuid::MAX_CLOCK_SEQUENCE,
        }
    }

    pub(crate) const fn from_raw(raw: u128) -> Self {
        Self::new((raw >> 64) as u64, raw as u16)
    }

    pub(crate) const fn to_raw(self) -> u128 {
        ((self.timestamp as u128) << 64) | self.clock_seq as u128
    }

    /// Returns the state to commit for a clock reading of `now` ticks, and
    /// whether the clock sequence had to be bumped.
    ///
    /// A reading past the last issued timestamp is taken as-is. Anything else
    /// (same tick, or the clock moved backward) issues `last + 1` under the
    /// next clock sequence, wrapping within 14 bits.
    pub(crate) const fn advance(self, now: u64) -> (Self, bool) {
        if now > self.timestamp {
            (Self::new(now, self.clock_seq), false)
        } else {
            (
                Self::new(
                    self.timestamp.wrapping_add(1),
                    self.clock_seq.wrapping_add(1),
                ),
                true,
            )
        }
    }
}

/// Reads `time` and converts it to 100-nanosecond ticks since the UUID epoch.
pub(crate) fn now_ticks<T: TimeSource<u64>>(time: &T) -> u64 {
    ticks_since_uuid_epoch(time.current_millis())
}

#[cfg(feature = "tracing")]
#[cold]
pub(crate) fn trace_clock_seq_bump(now: u64, state: ClockState) {
    tracing::debug!(
        clock_ticks = now,
        timestamp = state.timestamp,
        clock_seq = state.clock_seq,
        "clock did not advance past last issued timestamp; clock sequence incremented"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_both_fields_into_one_word() {
        let state = ClockState::new(0x0fff_ffff_ffff_ffff, 0x3fff);
        assert_eq!(ClockState::from_raw(state.to_raw()), state);
        assert_eq!(ClockState::from_raw(0), ClockState::new(0, 0));
    }

    #[test]
    fn masks_clock_seq_to_14_bits() {
        assert_eq!(ClockState::new(0, 0xffff).clock_seq, 0x3fff);
        assert_eq!(ClockState::from_raw(0x4001).clock_seq, 1);
    }

    #[test]
    fn takes_reading_that_moves_forward() {
        let (next, bumped) = ClockState::new(100, 7).advance(101);
        assert_eq!(next, ClockState::new(101, 7));
        assert!(!bumped);
    }

    #[test]
    fn bumps_on_same_tick() {
        let (next, bumped) = ClockState::new(100, 7).advance(100);
        assert_eq!(next, ClockState::new(101, 8));
        assert!(bumped);
    }

    #[test]
    fn bumps_on_clock_rollback() {
        let (next, bumped) = ClockState::new(100, 7).advance(3);
        assert_eq!(next, ClockState::new(101, 8));
        assert!(bumped);
    }

    #[test]
    fn wraps_clock_seq_within_14_bits() {
        let (next, bumped) = ClockState::new(100, 0x3fff).advance(0);
        assert_eq!(next, ClockState::new(101, 0));
        assert!(bumped);
    }
}
