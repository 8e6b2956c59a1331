use core::cell::Cell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ClockState, Error, NodeId, RandSource, Result, TimeSource, Uuid, UuidV1Generator};

use super::state::now_ticks;

/// A non-concurrent version-1 UUID generator suitable for single-threaded
/// environments.
///
/// The state lives in a [`Cell`], so the generator is `!Sync` and every call
/// is a plain read-modify-write.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Strictly increasing timestamps for the generator's lifetime
/// - ✅ Survives clock stalls and rollbacks (the clock sequence is bumped)
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want the lowest overhead per UUID
///
/// ## See Also
/// - [`AtomicUuidV1Generator`]
/// - [`LockUuidV1Generator`]
///
/// [`AtomicUuidV1Generator`]: crate::AtomicUuidV1Generator
/// [`LockUuidV1Generator`]: crate::LockUuidV1Generator
pub struct BasicUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    state: Cell<ClockState>,
    node: NodeId,
    time: T,
}

impl<T> BasicUuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a new [`BasicUuidV1Generator`] with the provided time source,
    /// drawing the default node and the clock sequence seed from `rng`.
    ///
    /// # Example
    /// ```
    /// use timeuuid::{BasicUuidV1Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicUuidV1Generator::new(SystemClock, ThreadRandom);
    /// let uuid = generator.next_uuid();
    /// assert_eq!(uuid.version(), 1);
    /// ```
    pub fn new<R: RandSource<u64>>(time: T, rng: R) -> Self {
        let node = NodeId::random(&rng);
        let clock_seq = rng.rand() as u16;
        Self::from_components(node, clock_seq, 0, time)
    }

    /// Creates a new generator from explicit component values.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub fn from_components(node: NodeId, clock_seq: u16, last_timestamp: u64, time: T) -> Self {
        Self {
            state: Cell::new(ClockState::new(last_timestamp, clock_seq)),
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
        self.state.get()
    }

    /// Generates a new UUID with the default node.
    pub fn next_uuid(&self) -> Uuid {
        let state = self.advance();
        Uuid::from_fields_v1(state.timestamp, state.clock_seq, self.node)
    }

    /// Generates a new UUID with a caller-supplied node, used unmodified.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNodeId`] if `node` is absent or not exactly
    /// six bytes. The generator state is left untouched.
    pub fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>,
    {
        let node = node.try_into()?;
        let state = self.advance();
        Ok(Uuid::from_fields_v1(state.timestamp, state.clock_seq, node))
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn advance(&self) -> ClockState {
        let now = now_ticks(&self.time);
        let (next, _bumped) = self.state.get().advance(now);
        #[cfg(feature = "tracing")]
        if _bumped {
            super::state::trace_clock_seq_bump(now, next);
        }
        self.state.set(next);
        next
    }
}

impl<T> UuidV1Generator<T> for BasicUuidV1Generator<T>
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
