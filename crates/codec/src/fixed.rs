//! Fixed-size items: big-endian ints, single bytes, bools, byte arrays and
//! padding.

use crate::errors::CodecError;
use crate::item::{Item, take};

/// Integer stored as a straight big-endian copy.
#[derive(Debug)]
pub struct BigEndian<'a, T>(pub &'a mut T);

/// Simple macro to wrap the fixed size int types, not much to see.
macro_rules! impl_big_endian_item {
    ( $ity:ident $bytes:literal ) => {
        impl Item for BigEndian<'_, $ity> {
            fn size(&self) -> usize {
                $bytes
            }

            fn encode(&self, buf: &mut [u8]) {
                buf[..$bytes].copy_from_slice(&self.0.to_be_bytes());
            }

            fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
                let mut arr = [0; $bytes];
                arr.copy_from_slice(take(buf, $bytes)?);
                *self.0 = <$ity>::from_be_bytes(arr);
                Ok($bytes)
            }
        }
    };
}

impl_big_endian_item!(u16 2);
impl_big_endian_item!(i16 2);
impl_big_endian_item!(u32 4);
impl_big_endian_item!(i32 4);
impl_big_endian_item!(u64 8);
impl_big_endian_item!(i64 8);

/// A single byte, written as itself.
#[derive(Debug)]
pub struct Byte<'a>(pub &'a mut u8);

impl Item for Byte<'_> {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = *self.0;
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        *self.0 = take(buf, 1)?[0];
        Ok(1)
    }
}

/// A bool as `0x01` (true) or `0x00` (false).
///
/// Decoding is lenient: anything other than `0x01` reads as false.
#[derive(Debug)]
pub struct Bool<'a>(pub &'a mut bool);

impl Item for Bool<'_> {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = u8::from(*self.0);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        *self.0 = take(buf, 1)?[0] == 1;
        Ok(1)
    }
}

/// Fixed-length byte array copied directly, with no length tag.
#[derive(Debug)]
pub struct FixedBytes<'a, const N: usize>(pub &'a mut [u8; N]);

impl<const N: usize> Item for FixedBytes<'_, N> {
    fn size(&self) -> usize {
        N
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[..N].copy_from_slice(&self.0[..]);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        self.0.copy_from_slice(take(buf, N)?);
        Ok(N)
    }
}

/// Quietly skips `n` bytes.  Nothing is written on encode and nothing is
/// checked on decode beyond the length.
#[derive(Copy, Clone, Debug)]
pub struct Padding(pub usize);

impl Item for Padding {
    fn size(&self) -> usize {
        self.0
    }

    fn encode(&self, _buf: &mut [u8]) {}

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        take(buf, self.0)?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut v = 0x0102u16;
        let mut buf = [0; 2];
        BigEndian(&mut v).encode(&mut buf);
        assert_eq!(buf, [0x01, 0x02]);

        let mut w = -2i32;
        let mut buf = [0; 4];
        BigEndian(&mut w).encode(&mut buf);
        assert_eq!(buf, [0xff, 0xff, 0xff, 0xfe]);

        let mut out = 0u64;
        let n = BigEndian(&mut out)
            .decode(&[0, 0, 0, 0, 0, 0, 1, 0, 0xaa])
            .expect("test: decode u64");
        assert_eq!(n, 8);
        assert_eq!(out, 256);
    }

    #[test]
    fn test_big_endian_short() {
        let mut out = 0u32;
        assert_eq!(
            BigEndian(&mut out).decode(&[1, 2, 3]),
            Err(CodecError::OverrunInput)
        );
        assert_eq!(out, 0, "failed decode must not touch the value");
    }

    #[test]
    fn test_bool_lenient_decode() {
        let mut b = true;
        for (byte, expected) in [(0x00, false), (0x01, true), (0x02, false), (0xff, false)] {
            Bool(&mut b).decode(&[byte]).expect("test: decode bool");
            assert_eq!(b, expected, "byte {byte:#x}");
        }
        assert_eq!(Bool(&mut b).decode(&[]), Err(CodecError::OverrunInput));
    }

    #[test]
    fn test_byte_and_array() {
        let mut arr = [7u8; 16];
        let mut buf = [0; 16];
        FixedBytes(&mut arr).encode(&mut buf);
        assert_eq!(buf, [7; 16]);

        let mut out = [0u8; 32];
        assert_eq!(
            FixedBytes(&mut out).decode(&[1; 31]),
            Err(CodecError::OverrunInput)
        );

        let mut byte = 0u8;
        assert_eq!(Byte(&mut byte).decode(&[0x9c, 0x00]), Ok(1));
        assert_eq!(byte, 0x9c);
    }

    #[test]
    fn test_padding() {
        let mut pad = Padding(3);
        let mut buf = [0xaa; 3];
        pad.encode(&mut buf);
        assert_eq!(buf, [0xaa; 3], "padding never writes");
        assert_eq!(pad.decode(&[1, 2, 3, 4]), Ok(3));
        assert_eq!(pad.decode(&[1, 2]), Err(CodecError::OverrunInput));
        assert_eq!(Padding(0).decode(&[]), Ok(0));
    }
}
