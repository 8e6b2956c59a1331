//! Time-ordered version-1 UUIDs.
//!
//! ```rust
//! use timeuuid::{AtomicUuidV1Generator, SystemClock, ThreadRandom};
//!
//! let generator = AtomicUuidV1Generator::new(SystemClock, ThreadRandom);
//! let uuid = generator.next_uuid();
//! println!("{uuid}"); // e.g. "ff3e1f90-0000-11ef-9cd2-81e4c1a70b3d"
//! assert_eq!(uuid.version(), 1);
//! ```
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since the UUID epoch
//!   (1582-10-15). Its low 32 bits fill `time_low` and its top 12 bits fill
//!   `time_high`. Bits 32..48 are ORed into the upper half of `time_low`, so
//!   `time_mid` is always zero and the timestamp is not recoverable from the
//!   UUID. See [`Uuid::from_fields_v1`].
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` is seeded randomly and incremented whenever the
//!   wall clock fails to advance past the last issued timestamp.
//! - The 48-bit `node` is either a random per-generator value with its marker
//!   bits set, or a caller-supplied value used as-is.
//!
//! Every generator keeps the last issued timestamp. A wall-clock reading that
//! does not move past it (millisecond resolution, or a clock rollback) is
//! replaced by `last + 1`, so the timestamps issued by one generator are
//! strictly increasing for its whole lifetime.
//!
//! # Generator flavours
//!
//! | Generator                 | Shared state            | Thread-safe |
//! | ------------------------- | ----------------------- | ----------- |
//! | [`AtomicUuidV1Generator`] | `AtomicU128` CAS loop   | ✅          |
//! | [`LockUuidV1Generator`]   | `Mutex`                 | ✅          |
//! | [`BasicUuidV1Generator`]  | `Cell`                  | ❌          |

mod error;
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
