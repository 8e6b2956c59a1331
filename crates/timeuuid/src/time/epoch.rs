/// Number of 100-nanosecond intervals between the UUID epoch (1582-10-15
/// 00:00:00 UTC) and the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UUID_EPOCH_OFFSET: u64 = 0x01B2_1DD2_1381_4000;

/// Number of 100-nanosecond UUID ticks per millisecond.
pub const TICKS_PER_MILLI: u64 = 10_000;

/// Converts Unix milliseconds into 100-nanosecond ticks since the UUID epoch.
///
/// Saturates instead of wrapping; a saturated reading is treated like any
/// other clock stall by the generators.
///
/// # Example
/// ```
/// use timeuuid::{UUID_EPOCH_OFFSET, ticks_since_uuid_epoch};
///
/// assert_eq!(ticks_since_uuid_epoch(0), UUID_EPOCH_OFFSET);
/// assert_eq!(ticks_since_uuid_epoch(1), UUID_EPOCH_OFFSET + 10_000);
/// ```
#[must_use]
pub const fn ticks_since_uuid_epoch(unix_millis: u64) -> u64 {
    unix_millis
        .saturating_mul(TICKS_PER_MILLI)
        .saturating_add(UUID_EPOCH_OFFSET)
}

/// Converts 100-nanosecond ticks since the UUID epoch back into Unix
/// milliseconds, or `None` if `ticks` predates the Unix epoch.
#[must_use]
pub const fn unix_millis_from_ticks(ticks: u64) -> Option<u64> {
    match ticks.checked_sub(UUID_EPOCH_OFFSET) {
        Some(since_unix) => Some(since_unix / TICKS_PER_MILLI),
        None => None,
    }
}
