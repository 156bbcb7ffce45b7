//! Order-preserving signed varint.
//!
//! An `n`-byte form holds values in `[-2^(7n-1), 2^(7n-1) - 1]` for `n` up
//! to 8.  It is the low `8n` bits of the two's complement value with the top
//! `n` bits inverted, which leaves a run of `n` header bits (ones when
//! non-negative, zeros when negative) followed by the value's own sign
//! extension bit acting as the terminator.
//!
//! ```txt
//! min       max          size     encoding, where s is the sign, x a value bit
//! -2^6      2^6 - 1      1        !s s xxxxxx
//! -2^13     2^13 - 1     2        !s!s s xxxxx xxxxxxxx
//! ...
//! -2^55     2^55 - 1     8        !s!s!s!s!s!s!s!s  s xxxxxxx  xxxxxxxx ...
//! others                 9        !s!s!s!s!s!s!s!s  (x ^ 2^63) as 8 big-endian bytes
//! ```
//!
//! The 8-byte form and the escape both start with `0xff` or `0x00`.  They're
//! told apart by the top bit of the second byte: the 8-byte form carries the
//! terminator there (opposite of the first byte), while an escaped value has
//! a magnitude of at least 2^55 so the bit copies the first byte.

use crate::errors::CodecError;
use crate::item::{Item, take};

/// The max number of bytes an ordered signed varint can take.
pub const ORD_VARINT_MAX_LEN: usize = 9;

/// Widest form before escaping.
const COMPACT_MAX_LEN: usize = 8;

/// Returns the number of bytes `v` takes as an ordered signed varint.
pub fn ord_varint_len(v: i64) -> usize {
    // Magnitude bits plus one for the sign.
    let mag = (if v < 0 { !v } else { v }) as u64;
    let bits = u64::BITS - mag.leading_zeros() + 1;
    let n = bits.div_ceil(7) as usize;
    if n > COMPACT_MAX_LEN {
        return ORD_VARINT_MAX_LEN;
    }
    n
}

/// Returns the first byte of a full-width (8 or 9 byte) encoding.
fn full_run(non_negative: bool) -> u8 {
    if non_negative { 0xff } else { 0x00 }
}

/// Writes `v` as an ordered signed varint to the front of `buf`, returning
/// the bytes written.
///
/// # Panics
///
/// If `buf` is shorter than [`ord_varint_len`] of `v`.
pub fn put_ord_varint(v: i64, buf: &mut [u8]) -> usize {
    let n = ord_varint_len(v);

    if n == ORD_VARINT_MAX_LEN {
        buf[0] = full_run(v >= 0);
        let flipped = (v as u64) ^ (1 << 63);
        buf[1..ORD_VARINT_MAX_LEN].copy_from_slice(&flipped.to_be_bytes());
        return n;
    }

    let be = v.to_be_bytes();
    buf[..n].copy_from_slice(&be[8 - n..]);
    // The top n bits are sign extension, inverting them makes the header.
    buf[0] ^= !0xffu8.checked_shr(n as u32).unwrap_or(0);
    n
}

/// Reads an ordered signed varint from the front of `buf`, returning the
/// value and the bytes consumed.
pub fn read_ord_varint(buf: &[u8]) -> Result<(i64, usize), CodecError> {
    let first = *buf.first().ok_or(CodecError::OverrunInput)?;
    let non_negative = first & 0x80 != 0;
    let run = match non_negative {
        true => first.leading_ones(),
        false => first.leading_zeros(),
    } as usize;

    if run == COMPACT_MAX_LEN {
        let second_top = take(buf, 2)?[1] & 0x80 != 0;

        if second_top == non_negative {
            let mut be = [0; 8];
            be.copy_from_slice(&take(buf, ORD_VARINT_MAX_LEN)?[1..]);
            let v = (u64::from_be_bytes(be) ^ (1 << 63)) as i64;
            return Ok((v, ORD_VARINT_MAX_LEN));
        }
    }

    let n = run;
    let mut be = [0; 8];
    be[8 - n..].copy_from_slice(take(buf, n)?);

    // Shift the header out and sign extend from the terminator.
    let shift = 64 - 7 * n as u32;
    let v = ((u64::from_be_bytes(be) << shift) as i64) >> shift;
    Ok((v, n))
}

/// Encodes `v` into a freshly allocated ordered signed varint.
pub fn encode_ord_varint(v: i64) -> Vec<u8> {
    let mut buf = vec![0; ord_varint_len(v)];
    put_ord_varint(v, &mut buf);
    buf
}

/// Ordered signed 64-bit varint item.
#[derive(Debug)]
pub struct OrdVarint64<'a>(pub &'a mut i64);

impl Item for OrdVarint64<'_> {
    fn size(&self) -> usize {
        ord_varint_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        put_ord_varint(*self.0, buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (v, n) = read_ord_varint(buf)?;
        *self.0 = v;
        Ok(n)
    }
}
