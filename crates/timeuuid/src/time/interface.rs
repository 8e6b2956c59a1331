/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// The timestamp type `T` is generic, and the unit is expected to be
/// **milliseconds** since the Unix epoch. Generators convert the reading into
/// 100-nanosecond UUID ticks with [`ticks_since_uuid_epoch`].
///
/// # Example
///
/// ```
/// use timeuuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
///
/// [`ticks_since_uuid_epoch`]: crate::ticks_since_uuid_epoch
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}
