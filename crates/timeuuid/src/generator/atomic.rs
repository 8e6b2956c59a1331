use portable_atomic::{AtomicU128, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ClockState, Error, NodeId, RandSource, Result, TimeSource, Uuid, UuidV1Generator};

use super::state::now_ticks;

/// A lock-free version-1 UUID generator suitable for multi-threaded
/// environments.
///
/// The last issued timestamp and the clock sequence live together in one
/// [`AtomicU128`]. Each call reads the state, derives the next one, and
/// commits it with a compare-and-set, retrying until it wins. Both fields
/// therefore move together, and the clock sequence baked into a UUID is
/// always the one committed with its timestamp.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Strictly increasing timestamps for the generator's lifetime
/// - ✅ Survives clock stalls and rollbacks (the clock sequence is bumped)
///
/// ## Caveats
/// The retry loop is unbounded. Under pathological contention a caller may
/// spin for a long time, although every failed attempt means another caller
/// made progress.
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - You want the lowest possible latency under light-to-moderate contention
///
/// ## See Also
/// - [`LockUuidV1Generator`]
/// - [`BasicUuidV1Generator`]
///
/// [`LockUuidV1Generator`]: crate::LockUuidV1Generator
/// [`BasicUuidV1Generator`]: crate::BasicUuidV1Generator
pub struct AtomicUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicU128>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicU128,
    node: NodeId,
    time: T,
}

impl<T> AtomicUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a new [`AtomicUuidV1Generator`] with the provided time source,
    /// drawing the default node and the clock sequence seed from `rng`.
    ///
    /// The node gets its [`NodeId::RANDOM_MARKER`] bits forced on. `rng` is
    /// not kept.
    ///
    /// # Example
    /// ```
    /// use timeuuid::{AtomicUuidV1Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = AtomicUuidV1Generator::new(SystemClock, ThreadRandom);
    /// let uuid = generator.next_uuid();
    /// assert_eq!(uuid.node(), generator.node());
    /// ```
    pub fn new<R: RandSource<u64>>(time: T, rng: R) -> Self {
        let node = NodeId::random(&rng);
        let clock_seq = rng.rand() as u16;
        Self::from_components(node, clock_seq, 0, time)
    }

    /// Creates a new generator from explicit component values.
    ///
    /// This constructor is primarily useful for tests, or for controlling the
    /// starting point of the generator manually. `clock_seq` is masked to 14
    /// bits. A `last_timestamp` of `0` means nothing has been issued yet.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub fn from_components(node: NodeId, clock_seq: u16, last_timestamp: u64, time: T) -> Self {
        let state = ClockState::new(last_timestamp, clock_seq).to_raw();
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(AtomicU128::new(state)),
            #[cfg(not(feature = "cache-padded"))]
            state: AtomicU128::new(state),
            node,
            time,
        }
    }

    /// Returns the default node identifier.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns a copy of the last issued timestamp and clock sequence.
    pub fn state(&self) -> ClockState {
        ClockState::from_raw(self.state.load(Ordering::Relaxed))
    }

    /// Generates a new UUID with the default node.
    ///
    /// # Example
    /// ```
    /// use timeuuid::{AtomicUuidV1Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = AtomicUuidV1Generator::new(SystemClock, ThreadRandom);
    /// let a = generator.next_uuid();
    /// let issued = generator.state();
    /// let b = generator.next_uuid();
    /// assert_ne!(a, b);
    /// assert!(generator.state().last_timestamp() > issued.last_timestamp());
    /// ```
    pub fn next_uuid(&self) -> Uuid {
        let state = self.advance();
        Uuid::from_fields_v1(state.timestamp, state.clock_seq, self.node)
    }

    /// Generates a new UUID with a caller-supplied node, used unmodified.
    ///
    /// The node is validated before the generator state is touched, so a
    /// rejected call consumes no timestamp.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNodeId`] if `node` is absent or not exactly
    /// six bytes.
    ///
    /// # Example
    /// ```
    /// use timeuuid::{AtomicUuidV1Generator, Error, SystemClock, ThreadRandom};
    ///
    /// let generator = AtomicUuidV1Generator::new(SystemClock, ThreadRandom);
    ///
    /// let node: &[u8] = &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab];
    /// let uuid = generator.next_uuid_with_node(node)?;
    /// assert!(uuid.to_string().ends_with("0123456789ab"));
    ///
    /// let short: &[u8] = &[0x01, 0x23, 0x45, 0x67, 0x89];
    /// assert_eq!(
    ///     generator.next_uuid_with_node(short),
    ///     Err(Error::InvalidNodeId { actual: Some(5) })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>,
    {
        let node = node.try_into()?;
        let state = self.advance();
        Ok(Uuid::from_fields_v1(state.timestamp, state.clock_seq, node))
    }

    /// Commits and returns the next state.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn advance(&self) -> ClockState {
        let now = now_ticks(&self.time);
        let mut current = self.state.load(Ordering::Relaxed);

        loop {
            let (next, _bumped) = ClockState::from_raw(current).advance(now);
            match self.state.compare_exchange_weak(
                current,
                next.to_raw(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    #[cfg(feature = "tracing")]
                    if _bumped {
                        super::state::trace_clock_seq_bump(now, next);
                    }
                    break next;
                }
                Err(actual) => {
                    // Lost the race; recompute from the winner's state.
                    current = actual;
                    core::hint::spin_loop();
                }
            }
        }
    }
}

impl<T> UuidV1Generator<T> for AtomicUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    type Err = core::convert::Infallible;

    fn new<R: RandSource<u64>>(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn from_components(node: NodeId, clock_seq: u16, last_timestamp: u64, time: T) -> Self {
        Self::from_components(node, clock_seq, last_timestamp, time)
    }

    fn node(&self) -> NodeId {
        self.node()
    }

    fn try_state(&self) -> Result<ClockState, Self::Err> {
        Ok(self.state())
    }

    fn try_next_uuid(&self) -> Result<Uuid, Self::Err> {
        Ok(self.next_uuid())
    }

    fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>,
    {
        self.next_uuid_with_node(node)
    }
}
