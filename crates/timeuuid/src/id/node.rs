use core::{fmt, str};

use crate::{Error, RandSource, id::hex};

/// A 48-bit node identifier: the final 12 hex digits of a version-1 UUID.
///
/// Historically a MAC address. Here it is either supplied by the caller and
/// used unmodified, or drawn at random with [`NodeId::random`], which sets the
/// [`NodeId::RANDOM_MARKER`] bits so a random node can never be mistaken for
/// a real, globally administered MAC.
///
/// # Example
/// ```
/// use timeuuid::NodeId;
///
/// let node = NodeId::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
/// assert_eq!(node.to_string(), "0123456789ab");
/// assert_eq!("0123456789AB".parse::<NodeId>(), Ok(node));
///
/// let short: &[u8] = &[0x01, 0x23];
/// assert!(NodeId::try_from(short).is_err());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct NodeId([u8; NodeId::LEN]);

impl NodeId {
    /// Length of a node identifier in bytes.
    pub const LEN: usize = 6;

    /// Bits forced on in the first byte of a random node.
    ///
    /// `0x80` flags the node as randomly generated. `0x01` is the IEEE 802
    /// multicast bit, which RFC 4122 §4.5 sets so a random node can never
    /// equal a real MAC address. Both are set; caller-supplied nodes are
    /// never altered.
    pub const RANDOM_MARKER: u8 = 0x81;

    const MAX_U48: u64 = (1 << 48) - 1;

    /// Wraps six caller-supplied bytes. No bits are altered.
    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a random node identifier with the [`Self::RANDOM_MARKER`] bits
    /// set.
    #[must_use]
    pub fn random<R: RandSource<u64>>(rng: &R) -> Self {
        let mut node = Self::from_u64(rng.rand());
        node.0[0] |= Self::RANDOM_MARKER;
        node
    }

    /// Builds a node from the low 48 bits of `value`, big-endian.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        let b = (value & Self::MAX_U48).to_be_bytes();
        Self([b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the node as a 48-bit big-endian integer.
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        let b = self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns a reference to the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; NodeId::LEN]> for NodeId {
    fn from(bytes: [u8; NodeId::LEN]) -> Self {
        Self(bytes)
    }
}

impl From<NodeId> for [u8; NodeId::LEN] {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl TryFrom<&[u8]> for NodeId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidNodeId {
                actual: Some(bytes.len()),
            })
    }
}

impl TryFrom<Option<&[u8]>> for NodeId {
    type Error = Error;

    fn try_from(bytes: Option<&[u8]>) -> Result<Self, Self::Error> {
        bytes
            .ok_or(Error::InvalidNodeId { actual: None })
            .and_then(Self::try_from)
    }
}

impl fmt::Display for NodeId {
    /// Returns the 12-digit lowercase hexadecimal representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 2 * Self::LEN];
        for (byte, out) in self.0.iter().zip(buf.chunks_exact_mut(2)) {
            hex::encode_byte(*byte, out);
        }
        f.write_str(str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl str::FromStr for NodeId {
    type Err = Error;

    /// Parses exactly 12 hexadecimal digits (either case).
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: Error = Error::InvalidText {
            expected: "12 hexadecimal digits",
        };
        let src = src.as_bytes();
        if src.len() != 2 * Self::LEN {
            return Err(ERR);
        }
        let mut dst = [0u8; Self::LEN];
        for (byte, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
            *byte = hex::decode_pair(pair[0], pair[1]).ok_or(ERR)?;
        }
        Ok(Self(dst))
    }
}
