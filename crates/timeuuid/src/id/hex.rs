//! Lowercase hex helpers shared by the textual forms of [`Uuid`] and
//! [`NodeId`].
//!
//! [`Uuid`]: crate::Uuid
//! [`NodeId`]: crate::NodeId

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes the two lowercase hex digits of `byte` into `out`.
pub(crate) fn encode_byte(byte: u8, out: &mut [u8]) {
    out[0] = DIGITS[(byte >> 4) as usize];
    out[1] = DIGITS[(byte & 0x0f) as usize];
}

/// Decodes a pair of hex digits (either case) into a byte.
pub(crate) fn decode_pair(hi: u8, lo: u8) -> Option<u8> {
    Some((decode_nibble(hi)? << 4) | decode_nibble(lo)?)
}

fn decode_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_every_byte() {
        let mut buf = [0u8; 2];
        for byte in 0..=u8::MAX {
            encode_byte(byte, &mut buf);
            assert!(buf.iter().all(|c| !c.is_ascii_uppercase()));
            assert_eq!(decode_pair(buf[0], buf[1]), Some(byte));
            assert_eq!(
                decode_pair(buf[0].to_ascii_uppercase(), buf[1].to_ascii_uppercase()),
                Some(byte)
            );
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(decode_pair(b'g', b'0'), None);
        assert_eq!(decode_pair(b'0', b'-'), None);
        assert_eq!(decode_pair(b' ', b'1'), None);
    }
}
