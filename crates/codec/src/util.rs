//! High-level util functions.

use crate::{CodecError, Item};

/// Encodes a single item into a newly allocated vec.
pub fn encode_to_vec(item: &impl Item) -> Vec<u8> {
    let mut buf = vec![0; item.size()];
    item.encode(&mut buf);
    buf
}

/// Decodes a single item from the front of `buf`, returning the bytes
/// consumed.  Anything after the item is left alone.
///
/// Unlike [`crate::Sequence::decode`], over-long encodings are accepted here,
/// so the result can be larger than the item's size afterwards.
pub fn decode_prefix(item: &mut impl Item, buf: &[u8]) -> Result<usize, CodecError> {
    item.decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, OrdUvarint64};

    #[test]
    fn test_decode_prefix_leaves_rest() {
        let mut v = 300u64;
        let mut buf = encode_to_vec(&OrdUvarint64(&mut v));
        buf.extend_from_slice(&[0xaa, 0xbb]);

        let mut out = 0u64;
        assert_eq!(decode_prefix(&mut OrdUvarint64(&mut out), &buf), Ok(2));
        assert_eq!(out, 300);
    }

    #[test]
    fn test_decode_prefix_overlong() {
        let mut out = 0u64;
        let mut field = Field::ord_uvarint64(&mut out);
        assert_eq!(decode_prefix(&mut field, &[0x80, 0x05, 0x42]), Ok(2));
        assert_eq!(field.size(), 1);
        drop(field);
        assert_eq!(out, 5);
    }

    #[test]
    fn test_decode_prefix_short() {
        let mut out = String::new();
        assert_eq!(
            decode_prefix(&mut Field::string(&mut out), &[0x03, b'a']),
            Err(CodecError::OverrunInput)
        );
    }
}
