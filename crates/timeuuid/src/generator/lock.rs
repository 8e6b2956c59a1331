use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ClockState, Error, NodeId, RandSource, Result, TimeSource, Uuid, UuidV1Generator};

use super::{mutex::Mutex, state::now_ticks};

/// A lock-based version-1 UUID generator suitable for multi-threaded
/// environments.
///
/// This generator wraps its [`ClockState`] in an [`Arc<Mutex<_>>`], allowing
/// safe shared use across threads. Cloning the generator shares the same
/// state, so clones never issue the same timestamp twice.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Strictly increasing timestamps for the generator's lifetime
/// - ✅ Survives clock stalls and rollbacks (the clock sequence is bumped)
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Your target doesn't support 128-bit atomics natively
/// - You want fair access under heavy contention rather than spinning
///
/// ## See Also
/// - [`AtomicUuidV1Generator`]
/// - [`BasicUuidV1Generator`]
///
/// [`AtomicUuidV1Generator`]: crate::AtomicUuidV1Generator
/// [`BasicUuidV1Generator`]: crate::BasicUuidV1Generator
pub struct LockUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<ClockState>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<ClockState>>,
    node: NodeId,
    time: T,
}

impl<T> Clone for LockUuidV1Generator<T>
where
    T: TimeSource<u64> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            node: self.node,
            time: self.time.clone(),
        }
    }
}

impl<T> LockUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a new [`LockUuidV1Generator`] with the provided time source,
    /// drawing the default node and the clock sequence seed from `rng`.
    ///
    /// # Example
    /// ```
    /// use timeuuid::{LockUuidV1Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = LockUuidV1Generator::new(SystemClock, ThreadRandom);
    /// let uuid = generator.try_next_uuid()?;
    /// assert_eq!(uuid.version(), 1);
    /// # Ok::<(), timeuuid::Error>(())
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
    /// bits.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub fn from_components(node: NodeId, clock_seq: u16, last_timestamp: u64, time: T) -> Self {
        let state = ClockState::new(last_timestamp, clock_seq);
        Self {
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(state))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(state)),
            node,
            time,
        }
    }

    /// Returns the default node identifier.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns a copy of the last issued timestamp and clock sequence.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn try_state(&self) -> Result<ClockState> {
        #[cfg(feature = "parking-lot")]
        let state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let state = self.state.lock()?;

        Ok(*state)
    }

    /// Generates a new UUID with the default node.
    ///
    /// Only available with `parking-lot`, whose mutex cannot be poisoned.
    ///
    /// # Example
    /// ```
    /// # #[cfg(feature = "parking-lot")] {
    /// use timeuuid::{LockUuidV1Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = LockUuidV1Generator::new(SystemClock, ThreadRandom);
    /// let uuid = generator.next_uuid();
    /// assert_eq!(uuid.node(), generator.node());
    /// # }
    /// ```
    #[cfg(feature = "parking-lot")]
    pub fn next_uuid(&self) -> Uuid {
        let state = self.advance();
        Uuid::from_fields_v1(state.timestamp, state.clock_seq, self.node)
    }

    /// Attempts to generate a new UUID with the default node.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn try_next_uuid(&self) -> Result<Uuid> {
        #[cfg(feature = "parking-lot")]
        let state = self.advance();
        #[cfg(not(feature = "parking-lot"))]
        let state = self.advance()?;

        Ok(Uuid::from_fields_v1(state.timestamp, state.clock_seq, self.node))
    }

    /// Generates a new UUID with a caller-supplied node, used unmodified.
    ///
    /// # Errors
    /// - [`Error::InvalidNodeId`] if `node` is absent or not exactly six
    ///   bytes. The lock is never taken in that case.
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>,
    {
        let node = node.try_into()?;

        #[cfg(feature = "parking-lot")]
        let state = self.advance();
        #[cfg(not(feature = "parking-lot"))]
        let state = self.advance()?;

        Ok(Uuid::from_fields_v1(state.timestamp, state.clock_seq, node))
    }

    #[cfg(feature = "parking-lot")]
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn advance(&self) -> ClockState {
        let now = now_ticks(&self.time);
        let mut state = self.state.lock();
        Self::commit(&mut state, now)
    }

    #[cfg(not(feature = "parking-lot"))]
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn advance(&self) -> Result<ClockState> {
        let now = now_ticks(&self.time);
        let mut state = self.state.lock()?;
        Ok(Self::commit(&mut state, now))
    }

    fn commit(state: &mut ClockState, now: u64) -> ClockState {
        let (next, _bumped) = state.advance(now);
        #[cfg(feature = "tracing")]
        if _bumped {
            super::state::trace_clock_seq_bump(now, next);
        }
        *state = next;
        next
    }
}

impl<T> UuidV1Generator<T> for LockUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    type Err = Error;

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
        self.try_state()
    }

    fn try_next_uuid(&self) -> Result<Uuid, Self::Err> {
        self.try_next_uuid()
    }

    fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>,
    {
        self.next_uuid_with_node(node)
    }
}
