//! Order-preserving unsigned varint.
//!
//! Like UTF-8, the count of leading ones in the first byte says how many
//! bytes follow, and only the significant bits of the value are stored,
//! right-aligned big-endian under that header.  Because longer encodings
//! always start with more ones and each form is big-endian, comparing the
//! encoded bytes lexicographically gives the same order as comparing the
//! numbers.  Values of 57 bits or more escape to a full 8-byte copy behind a
//! `0xff` marker, which is one byte shorter than a conventional varint needs
//! for them.
//!
//! ```txt
//! min     max          size     encoding, where x is a value bit
//! 0       2^7 - 1      1        0xxxxxxx
//! 2^7     2^14 - 1     2        10xxxxxx xxxxxxxx
//! 2^14    2^21 - 1     3        110xxxxx xxxxxxxx xxxxxxxx
//! 2^21    2^28 - 1     4        1110xxxx xxxxxxxx xxxxxxxx xxxxxxxx
//! 2^28    2^35 - 1     5        11110xxx xxxxxxxx ...
//! 2^35    2^42 - 1     6        111110xx xxxxxxxx ...
//! 2^42    2^49 - 1     7        1111110x xxxxxxxx ...
//! 2^49    2^56 - 1     8        11111110 xxxxxxxx ...
//! 2^56    2^64 - 1     9        11111111 xxxxxxxx xxxxxxxx ... (8 value bytes)
//! ```

use crate::errors::CodecError;
use crate::item::{Item, take};

/// The max number of bytes an ordered uvarint can take.
pub const ORD_UVARINT_MAX_LEN: usize = 9;

/// First byte of the escape form.
const ESCAPE_MARKER: u8 = 0xff;

/// Widest value that still fits the compact form.
const COMPACT_MAX_BITS: u32 = 56;

/// Returns the number of bytes `v` takes as an ordered uvarint.
pub fn ord_uvarint_len(v: u64) -> usize {
    let bits = u64::BITS - v.leading_zeros();
    if bits > COMPACT_MAX_BITS {
        return ORD_UVARINT_MAX_LEN;
    }

    (bits.div_ceil(7) as usize).max(1)
}

/// Writes `v` as an ordered uvarint to the front of `buf`, returning the
/// bytes written.
///
/// # Panics
///
/// If `buf` is shorter than [`ord_uvarint_len`] of `v`.
pub fn put_ord_uvarint(v: u64, buf: &mut [u8]) -> usize {
    let n = ord_uvarint_len(v);
    let be = v.to_be_bytes();

    if n == ORD_UVARINT_MAX_LEN {
        buf[0] = ESCAPE_MARKER;
        buf[1..ORD_UVARINT_MAX_LEN].copy_from_slice(&be);
        return n;
    }

    // `v` is under 2^(7n), so the top n bits of the window are clear and the
    // header can just be or'd in.
    buf[..n].copy_from_slice(&be[8 - n..]);
    buf[0] |= !(0xffu8 >> (n - 1));
    n
}

/// Reads an ordered uvarint from the front of `buf`, returning the value and
/// the bytes consumed.
///
/// Over-long encodings are accepted; the header decides the width and the
/// value is masked to it.  [`crate::Sequence`] rejects them when decoding.
pub fn read_ord_uvarint(buf: &[u8]) -> Result<(u64, usize), CodecError> {
    let first = *buf.first().ok_or(CodecError::OverrunInput)?;
    let n = first.leading_ones() as usize + 1;

    if n > 8 {
        let mut be = [0; 8];
        be.copy_from_slice(&take(buf, ORD_UVARINT_MAX_LEN)?[1..]);
        return Ok((u64::from_be_bytes(be), ORD_UVARINT_MAX_LEN));
    }

    let mut be = [0; 8];
    be[8 - n..].copy_from_slice(take(buf, n)?);
    let mask = (1u64 << (7 * n)) - 1;
    Ok((u64::from_be_bytes(be) & mask, n))
}

/// Encodes `v` into a freshly allocated ordered uvarint.
pub fn encode_ord_uvarint(v: u64) -> Vec<u8> {
    let mut buf = vec![0; ord_uvarint_len(v)];
    put_ord_uvarint(v, &mut buf);
    buf
}

/// Ordered unsigned 64-bit varint item.
#[derive(Debug)]
pub struct OrdUvarint64<'a>(pub &'a mut u64);

impl Item for OrdUvarint64<'_> {
    fn size(&self) -> usize {
        ord_uvarint_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        put_ord_uvarint(*self.0, buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (v, n) = read_ord_uvarint(buf)?;
        *self.0 = v;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (first value of the width, width).
    const WIDTH_STARTS: [(u64, usize); 9] = [
        (0, 1),
        (1 << 7, 2),
        (1 << 14, 3),
        (1 << 21, 4),
        (1 << 28, 5),
        (1 << 35, 6),
        (1 << 42, 7),
        (1 << 49, 8),
        (1 << 56, 9),
    ];

    #[test]
    fn test_len_at_every_boundary() {
        for (start, len) in WIDTH_STARTS {
            assert_eq!(ord_uvarint_len(start), len, "start of width {len}");
            if start > 0 {
                assert_eq!(ord_uvarint_len(start - 1), len - 1, "end of width {}", len - 1);
            }
        }
        assert_eq!(ord_uvarint_len(u64::MAX), 9);
    }

    #[test]
    fn test_size_boundaries() {
        assert_eq!(encode_ord_uvarint(127).len(), 1);
        assert_eq!(encode_ord_uvarint(128).len(), 2);
        assert_eq!(encode_ord_uvarint((1 << 56) - 1).len(), 8);
        assert_eq!(encode_ord_uvarint(1 << 56).len(), 9);
    }

    #[test]
    fn test_exact_bytes() {
        assert_eq!(encode_ord_uvarint(0), [0x00]);
        assert_eq!(encode_ord_uvarint(127), [0x7f]);
        assert_eq!(encode_ord_uvarint(128), [0x80, 0x80]);
        assert_eq!(encode_ord_uvarint(0x3fff), [0xbf, 0xff]);
        assert_eq!(encode_ord_uvarint(0x4000), [0xc0, 0x40, 0x00]);
        assert_eq!(
            encode_ord_uvarint((1 << 56) - 1),
            [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
        assert_eq!(
            encode_ord_uvarint(1 << 56),
            [0xff, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(encode_ord_uvarint(u64::MAX), [0xff; 9]);
    }

    #[test]
    fn test_escape_threshold() {
        let below = (1u64 << 56) - 1;
        let at = 1u64 << 56;
        assert_eq!(u64::BITS - below.leading_zeros(), 56);
        assert_eq!(u64::BITS - at.leading_zeros(), 57);

        let below_enc = encode_ord_uvarint(below);
        let at_enc = encode_ord_uvarint(at);
        assert_ne!(below_enc[0], ESCAPE_MARKER);
        assert_eq!(at_enc[0], ESCAPE_MARKER);
        assert!(below_enc < at_enc);

        assert_eq!(read_ord_uvarint(&below_enc), Ok((below, 8)));
        assert_eq!(read_ord_uvarint(&at_enc), Ok((at, 9)));
    }

    #[test]
    fn test_roundtrip_and_order_around_boundaries() {
        let mut values = Vec::new();
        for (start, _) in WIDTH_STARTS {
            for delta in [0, 1, 2] {
                values.push(start.saturating_sub(delta));
                values.push(start.saturating_add(delta));
            }
        }
        values.extend([u64::MAX - 1, u64::MAX]);
        values.sort_unstable();
        values.dedup();

        let encoded: Vec<_> = values.iter().map(|v| encode_ord_uvarint(*v)).collect();
        for (v, enc) in values.iter().zip(&encoded) {
            assert_eq!(read_ord_uvarint(enc), Ok((*v, enc.len())), "roundtrip {v}");
        }
        for pair in encoded.windows(2) {
            assert!(pair[0] < pair[1], "{:x?} !< {:x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_truncated() {
        assert_eq!(read_ord_uvarint(&[]), Err(CodecError::OverrunInput));
        for v in [128, 1 << 30, (1 << 56) - 1, 1 << 56, u64::MAX] {
            let enc = encode_ord_uvarint(v);
            assert_eq!(
                read_ord_uvarint(&enc[..enc.len() - 1]),
                Err(CodecError::OverrunInput),
                "truncated {v}"
            );
        }
    }

    #[test]
    fn test_reads_only_its_prefix() {
        let mut buf = encode_ord_uvarint(300);
        buf.extend_from_slice(&[0xff, 0xff]);
        assert_eq!(read_ord_uvarint(&buf), Ok((300, 2)));
    }

    #[test]
    fn test_overlong_is_masked() {
        // 2-byte header around a value that would fit in 1 byte.
        assert_eq!(read_ord_uvarint(&[0x80, 0x05]), Ok((5, 2)));
    }

    #[test]
    fn test_item() {
        let mut v = 1u64 << 40;
        let item = OrdUvarint64(&mut v);
        assert_eq!(item.size(), 6);
        let mut buf = [0; 6];
        item.encode(&mut buf);

        let mut out = 0u64;
        assert_eq!(OrdUvarint64(&mut out).decode(&buf), Ok(6));
        assert_eq!(out, 1 << 40);
    }
}
