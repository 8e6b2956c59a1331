use core::fmt;

use crate::{ClockState, Error, NodeId, RandSource, Result, TimeSource, Uuid};

/// A minimal interface for generating version-1 UUIDs
pub trait UuidV1Generator<T>
where
    T: TimeSource<u64>,
{
    type Err: fmt::Debug;

    /// Creates a new generator with a random node and clock sequence drawn
    /// from `rng`.
    fn new<R: RandSource<u64>>(time: T, rng: R) -> Self;

    /// Creates a generator from explicit component values.
    fn from_components(node: NodeId, clock_seq: u16, last_timestamp: u64, time: T) -> Self;

    /// Returns the default node identifier.
    fn node(&self) -> NodeId;

    /// Returns a copy of the last issued timestamp and clock sequence.
    ///
    /// # Errors
    /// - May return an error if the underlying generator uses a lock and it is
    ///   poisoned.
    fn try_state(&self) -> Result<ClockState, Self::Err>;

    /// Generates a UUID with the default node.
    ///
    /// # Errors
    /// - May return an error if the underlying generator uses a lock and it is
    ///   poisoned.
    fn try_next_uuid(&self) -> Result<Uuid, Self::Err>;

    /// Generates a UUID with a caller-supplied node.
    ///
    /// # Errors
    /// - [`Error::InvalidNodeId`] if `node` is absent or not 6 bytes. The
    ///   generator state is left untouched.
    /// - May return a lock error if the underlying generator uses a lock and
    ///   it is poisoned.
    fn next_uuid_with_node<N>(&self, node: N) -> Result<Uuid>
    where
        N: TryInto<NodeId>,
        Error: From<N::Error>;
}
