use crate::NodeId;

/// A result type defaulting to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `timeuuid` can produce.
///
/// Generation itself never fails: clock stalls and rollbacks are absorbed by
/// the clock sequence. Errors only come from caller input (node identifiers,
/// text parsing) or, for [`LockUuidV1Generator`] on a std mutex, from lock
/// poisoning.
///
/// [`LockUuidV1Generator`]: crate::LockUuidV1Generator
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A node identifier was absent or not exactly [`NodeId::LEN`] bytes.
    #[error("invalid node ID: expected {} bytes, got {}", NodeId::LEN, describe_len(.actual))]
    InvalidNodeId {
        /// The number of bytes received, or `None` if no node was supplied.
        actual: Option<usize>,
    },

    /// A string was not in the expected textual form.
    #[error("invalid string representation: expected {expected}")]
    InvalidText {
        /// Describes the accepted form.
        expected: &'static str,
    },

    /// The generator lock was poisoned by a panicking thread.
    ///
    /// `parking_lot` mutexes do not poison, so this variant is not available
    /// with the `parking-lot` feature.
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

fn describe_len(actual: &Option<usize>) -> String {
    match actual {
        Some(len) => format!("{len} bytes"),
        None => String::from("none"),
    }
}

// Lets infallible conversions (e.g. `NodeId` into itself) flow through the
// same `?` as fallible ones.
impl From<core::convert::Infallible> for Error {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn describes_expected_and_actual_node_length() {
        let err = Error::InvalidNodeId { actual: Some(5) };
        assert_eq!(
            err.to_string(),
            "invalid node ID: expected 6 bytes, got 5 bytes"
        );

        let err = Error::InvalidNodeId { actual: None };
        assert_eq!(err.to_string(), "invalid node ID: expected 6 bytes, got none");
    }

    #[test]
    fn describes_expected_text_form() {
        let err = Error::InvalidText {
            expected: "12 hexadecimal digits",
        };
        assert_eq!(
            err.to_string(),
            "invalid string representation: expected 12 hexadecimal digits"
        );
    }
}
