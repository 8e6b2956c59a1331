use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is cryptographically secure (ChaCha-based), seeded from the
/// operating system and reseeded periodically.
///
/// This type does **not** store the RNG itself; it accesses the thread-local
/// generator on each call, so it is a zero-sized `Send + Sync` value.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
