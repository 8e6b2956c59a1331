use core::{fmt, str};

use crate::{Error, NodeId, id::hex};

/// A 128-bit Universally Unique IDentifier.
///
/// The value is stored as a single big-endian `u128`, so the derived
/// [`Ord`] matches both the byte order and the lexical order of the canonical
/// string.
///
/// # Example
/// ```
/// use timeuuid::{NodeId, Uuid};
///
/// let node = NodeId::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
/// let uuid = Uuid::from_fields_v1(0x01ef_af3c_5c3a_1f90, 0x1cd2, node);
///
/// assert_eq!(uuid.to_string(), "ff3e1f90-0000-11ef-9cd2-0123456789ab");
/// assert_eq!(uuid.version(), 1);
/// assert_eq!(uuid.clock_sequence(), 0x1cd2);
/// assert_eq!(uuid.node(), node);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid(u128);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self(0);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self(u128::MAX);

    /// Largest value of the 14-bit clock sequence field.
    pub const MAX_CLOCK_SEQUENCE: u16 = (1 << 14) - 1;

    /// Length of the canonical 8-4-4-4-12 string.
    pub const ENCODED_LEN: usize = 36;

    /// Creates a version-1 UUID from its field values.
    ///
    /// Only the low 60 bits of `timestamp` and the low 14 bits of
    /// `clock_seq` are encoded. The version nibble is set to `1` and the
    /// variant bits to `10`.
    ///
    /// The high word is laid out as:
    ///
    /// ```text
    /// bits 63..48  ts[31..16] | ts[47..32]
    /// bits 47..32  ts[15..0]
    /// bits 31..16  0
    /// bits 15..12  version (1)
    /// bits 11..0   ts[59..48]
    /// ```
    ///
    /// Bits 47..32 of the timestamp are folded into the leading group rather
    /// than written to `time_mid`, so the timestamp cannot be recovered from
    /// the encoded value.
    #[must_use]
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: NodeId) -> Self {
        let msb = ((timestamp & 0x0fff_0000_0000_0000) >> 48)
            | ((timestamp & 0x0000_ffff_0000_0000) << 16)
            | ((timestamp & 0x0000_0000_ffff_ffff) << 32)
            | (1 << 12);
        let lsb = (((clock_seq & Self::MAX_CLOCK_SEQUENCE) as u64) << 48)
            | 0x8000_0000_0000_0000
            | node.to_u64();
        Self::from_words(msb, lsb)
    }

    /// Creates a UUID from its most and least significant 64-bit words.
    #[must_use]
    pub const fn from_words(msb: u64, lsb: u64) -> Self {
        Self(((msb as u128) << 64) | lsb as u128)
    }

    /// Creates a UUID from its 128-bit integer value.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Returns the 128-bit integer value.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        self.0
    }

    /// Returns the most significant 64 bits: time-low, time-mid, and
    /// time-high-and-version.
    #[must_use]
    pub const fn msb(self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Returns the least significant 64 bits: clock-sequence-and-variant,
    /// and node.
    #[must_use]
    pub const fn lsb(self) -> u64 {
        self.0 as u64
    }

    /// Returns the 16-byte big-endian representation.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Returns the 4-bit version field.
    #[must_use]
    pub const fn version(self) -> u8 {
        ((self.msb() >> 12) & 0xf) as u8
    }

    /// Returns the top two bits of the clock-seq-high octet. `0b10` for the
    /// RFC 4122 variant.
    #[must_use]
    pub const fn variant_bits(self) -> u8 {
        (self.lsb() >> 62) as u8
    }

    /// Returns the 14-bit clock sequence.
    #[must_use]
    pub const fn clock_sequence(self) -> u16 {
        ((self.lsb() >> 48) as u16) & Self::MAX_CLOCK_SEQUENCE
    }

    /// Returns the 48-bit node identifier.
    #[must_use]
    pub const fn node(self) -> NodeId {
        NodeId::from_u64(self.lsb())
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical lowercase hexadecimal string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::ENCODED_LEN];
        let mut pos = 0;
        for (i, byte) in self.to_bytes().into_iter().enumerate() {
            hex::encode_byte(byte, &mut buf[pos..pos + 2]);
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                buf[pos] = b'-';
                pos += 1;
            }
        }
        f.write_str(str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Parses the 8-4-4-4-12 hexadecimal string representation. Digits may be
    /// in either case; hyphens are mandatory.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: Error = Error::InvalidText {
            expected: "a 36-character 8-4-4-4-12 hex UUID",
        };
        let src = src.as_bytes();
        if src.len() != Self::ENCODED_LEN {
            return Err(ERR);
        }
        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = hex::decode_pair(src[pos], src[pos + 1]).ok_or(ERR)?;
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                if src[pos] != b'-' {
                    return Err(ERR);
                }
                pos += 1;
            }
        }
        Ok(Self::from(dst))
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.to_bytes()
    }
}

impl From<u128> for Uuid {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Uuid> for u128 {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl From<Uuid> for String {
    fn from(uuid: Uuid) -> Self {
        uuid.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: NodeId = NodeId::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);

    /// Returns a collection of prepared `(timestamp, clock_seq, node)` cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;
        const MAX_UINT48: u64 = (1 << 48) - 1;

        &[
            ((0, 0, 0), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, 0), "ffffffff-0000-1fff-8000-000000000000"),
            ((0, MAX_UINT14, 0), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, MAX_UINT48), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, MAX_UINT48),
                "ffffffff-0000-1fff-bfff-ffffffffffff",
            ),
            (
                (0x0123_4567_89ab_cdef, 0x1234, 0x0123_4567_89ab),
                "cdefcdef-0000-1123-9234-0123456789ab",
            ),
            (
                (0x01ef_af3c_5c3a_1f90, 0x1cd2, 0x81e4_c1a7_0b3d),
                "ff3e1f90-0000-11ef-9cd2-81e4c1a70b3d",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for ((ts, seq, node), text) in prepare_cases() {
            let uuid = Uuid::from_fields_v1(*ts, *seq, NodeId::from_u64(*node));
            assert_eq!(&uuid.to_string(), text);
            assert_eq!(Ok(uuid), text.parse());
            assert_eq!(Ok(uuid), text.to_uppercase().parse());
            assert_eq!(uuid.clock_sequence(), *seq);
            assert_eq!(uuid.node().to_u64(), *node);
            assert_eq!(uuid.version(), 1);
            assert_eq!(uuid.variant_bits(), 0b10);
        }
    }

    /// Masks fields wider than their slots
    #[test]
    fn masks_oversized_fields() {
        let uuid = Uuid::from_fields_v1(u64::MAX, u16::MAX, NODE);
        assert_eq!(uuid, Uuid::from_fields_v1((1 << 60) - 1, u16::MAX >> 2, NODE));
        assert_eq!(uuid.clock_sequence(), Uuid::MAX_CLOCK_SEQUENCE);
        assert_eq!(uuid.version(), 1);
        assert_eq!(uuid.variant_bits(), 0b10);
    }

    /// Splits into the expected words
    #[test]
    fn splits_into_words() {
        let uuid = Uuid::from_fields_v1(0x0123_4567_89ab_cdef, 0x1234, NODE);
        assert_eq!(uuid.msb(), 0xcdef_cdef_0000_1123);
        assert_eq!(uuid.lsb(), 0x9234_0123_4567_89ab);
        assert_eq!(Uuid::from_words(uuid.msb(), uuid.lsb()), uuid);
    }

    /// Builds the high word field by field
    #[test]
    fn builds_high_word_from_timestamp() {
        for ts in [
            0,
            0x0123_4567_89ab_cdef,
            0x01ee_833b_04af_c000,
            0x0fff_ffff_ffff_ffff,
        ] {
            let expected = ((ts & 0x0fff_0000_0000_0000) >> 48)
                | ((ts & 0x0000_ffff_0000_0000) << 16)
                | ((ts & 0x0000_0000_ffff_ffff) << 32)
                | (1 << 12);
            assert_eq!(Uuid::from_fields_v1(ts, 0, NODE).msb(), expected, "{ts:#x}");
        }
    }

    /// Folds timestamp bits 47..32 into the leading group
    #[test]
    fn folds_time_mid_into_leading_group() {
        let a = Uuid::from_fields_v1(0x0000_0001_0000_0000, 0, NODE);
        let b = Uuid::from_fields_v1(0x0000_0000_0001_0000, 0, NODE);
        assert_eq!(a.to_string(), "00010000-0000-1000-8000-0123456789ab");
        assert_eq!(a, b);

        let uuid = Uuid::from_fields_v1(0x01ee_833b_04af_c000, 0x0123, NODE);
        assert_eq!(uuid.to_string(), "87bfc000-0000-11ee-8123-0123456789ab");
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 5c3a1f90-af3c-11ef-9cd2-0123456789ab",
            "5c3a1f90-af3c-11ef-9cd2-0123456789ab ",
            "+5c3a1f90-af3c-11ef-9cd2-0123456789a",
            "5c3a1f90af3c11ef9cd20123456789ab",
            "5c3a1f90-af3c11ef-9cd2-0123456789ab",
            "{5c3a1f90-af3c-11ef-9cd2-0123456789ab}",
            "5c3a1f90-af3c-11 f-9cd2-0123456789ab",
            "5c3a1g90-af3c-11ef-9cd2-0123456789ab",
            "5c3a1f90-af3c-11ef-9cd2_0123456789ab",
            "5c3a1f90-af3c-11ef-9cd2-0123456789abé",
        ];

        for e in cases {
            assert_eq!(
                e.parse::<Uuid>(),
                Err(Error::InvalidText {
                    expected: "a 36-character 8-4-4-4-12 hex UUID"
                }),
                "{e:?} should not parse"
            );
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.to_string(),
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for ((ts, seq, node), _) in prepare_cases() {
            let e = Uuid::from_fields_v1(*ts, *seq, NodeId::from_u64(*node));
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(String::from(e).as_str()), Ok(e));
        }
    }

    /// Orders like the canonical string
    #[test]
    fn orders_like_canonical_string() {
        let mut uuids: Vec<Uuid> = prepare_cases()
            .iter()
            .map(|((ts, seq, node), _)| Uuid::from_fields_v1(*ts, *seq, NodeId::from_u64(*node)))
            .collect();
        uuids.sort();
        let texts: Vec<String> = uuids.iter().map(Uuid::to_string).collect();
        let mut sorted = texts.clone();
        sorted.sort();
        assert_eq!(texts, sorted);
    }
}
