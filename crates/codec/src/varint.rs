//! Conventional little-endian base-128 varints.
//!
//! Seven payload bits per byte, low groups first, with the top bit of each
//! byte set when another byte follows.  Smaller numbers use fewer bytes, but
//! the encoded bytes do NOT sort like the numbers do; see
//! [`crate::ord_varint`] for that.
//!
//! ```txt
//! min     max          size     encoding
//! 0       2^7 - 1      1        0xxxxxxx
//! 2^7     2^14 - 1     2        1xxxxxxx 0yyyyyyy
//! 2^14    2^21 - 1     3        1xxxxxxx 1yyyyyyy 0zzzzzzz
//! ...
//! 2^63    2^64 - 1     10       1xxxxxxx ... 1ccccccc 0000000d
//! ```

use crate::errors::CodecError;
use crate::item::Item;

/// The max number of bytes a u64 varint can take.
pub const UVARINT_MAX_LEN: usize = 10;

/// Returns the number of bytes `v` takes as a uvarint.
pub fn uvarint_len(v: u64) -> usize {
    let bits = (u64::BITS - v.leading_zeros()) as usize;
    bits.div_ceil(7).max(1)
}

/// Writes `v` as a uvarint to the front of `buf`, returning the bytes
/// written.
///
/// # Panics
///
/// If `buf` is shorter than [`uvarint_len`] of `v`.
pub fn put_uvarint(mut v: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    while v >= 0x80 {
        buf[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    buf[i] = v as u8;
    i + 1
}

/// Reads a uvarint from the front of `buf`, returning the value and the
/// bytes consumed.
pub fn read_uvarint(buf: &[u8]) -> Result<(u64, usize), CodecError> {
    let mut v = 0u64;
    let mut shift = 0u32;
    for (i, &b) in buf.iter().enumerate() {
        if i == UVARINT_MAX_LEN {
            return Err(CodecError::Malformed("uvarint"));
        }

        if b < 0x80 {
            // The last byte only has room for the one remaining bit.
            if i == UVARINT_MAX_LEN - 1 && b > 1 {
                return Err(CodecError::Malformed("uvarint"));
            }
            return Ok((v | (u64::from(b) << shift), i + 1));
        }

        v |= u64::from(b & 0x7f) << shift;
        shift += 7;
    }

    Err(CodecError::OverrunInput)
}

fn zigzag_encode(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

fn zigzag_decode(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

/// Unsigned 64-bit varint item.
#[derive(Debug)]
pub struct Uvarint64<'a>(pub &'a mut u64);

impl Item for Uvarint64<'_> {
    fn size(&self) -> usize {
        uvarint_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        put_uvarint(*self.0, buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (v, n) = read_uvarint(buf)?;
        *self.0 = v;
        Ok(n)
    }
}

/// Unsigned 32-bit varint item.  Same layout as [`Uvarint64`], but decoding
/// a value above `u32::MAX` is an error.
#[derive(Debug)]
pub struct Uvarint32<'a>(pub &'a mut u32);

impl Item for Uvarint32<'_> {
    fn size(&self) -> usize {
        uvarint_len(u64::from(*self.0))
    }

    fn encode(&self, buf: &mut [u8]) {
        put_uvarint(u64::from(*self.0), buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (v, n) = read_uvarint(buf)?;
        *self.0 = u32::try_from(v).map_err(|_| CodecError::Malformed("uvarint32"))?;
        Ok(n)
    }
}

/// Signed 64-bit varint item, zigzag mapped so small magnitudes of either
/// sign stay short.
#[derive(Debug)]
pub struct Varint64<'a>(pub &'a mut i64);

impl Item for Varint64<'_> {
    fn size(&self) -> usize {
        uvarint_len(zigzag_encode(*self.0))
    }

    fn encode(&self, buf: &mut [u8]) {
        put_uvarint(zigzag_encode(*self.0), buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (v, n) = read_uvarint(buf)?;
        *self.0 = zigzag_decode(v);
        Ok(n)
    }
}
