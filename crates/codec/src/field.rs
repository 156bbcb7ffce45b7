//! Closed set of item kinds a [`crate::Sequence`] can hold.

use crate::delim::{LengthDelimBytes, LengthDelimString};
use crate::errors::CodecError;
use crate::fixed::{BigEndian, Bool, Byte, FixedBytes, Padding};
use crate::item::Item;
use crate::ord_varint::OrdUvarint64;
use crate::ord_varint_signed::OrdVarint64;
use crate::varint::{Uvarint32, Uvarint64, Varint64};

/// One entry of a sequence, bound to a value borrowed from the structure
/// being encoded or decoded.
#[derive(Debug)]
pub enum Field<'a> {
    /// Skipped bytes.
    Padding(Padding),
    /// Raw byte.
    Byte(Byte<'a>),
    /// `0x00`/`0x01` bool.
    Bool(Bool<'a>),
    /// 2-byte big-endian.
    U16(BigEndian<'a, u16>),
    /// 2-byte big-endian, two's complement.
    I16(BigEndian<'a, i16>),
    /// 4-byte big-endian.
    U32(BigEndian<'a, u32>),
    /// 4-byte big-endian, two's complement.
    I32(BigEndian<'a, i32>),
    /// 8-byte big-endian.
    U64(BigEndian<'a, u64>),
    /// 8-byte big-endian, two's complement.
    I64(BigEndian<'a, i64>),
    /// Conventional varint, checked to 32 bits.
    Uvarint32(Uvarint32<'a>),
    /// Conventional varint.
    Uvarint64(Uvarint64<'a>),
    /// Zigzag conventional varint.
    Varint64(Varint64<'a>),
    /// Order-preserving unsigned varint.
    OrdUvarint64(OrdUvarint64<'a>),
    /// Order-preserving signed varint.
    OrdVarint64(OrdVarint64<'a>),
    /// Length-tagged bytes.
    Bytes(LengthDelimBytes<'a>),
    /// Length-tagged string.
    Str(LengthDelimString<'a>),
    /// 16 raw bytes.
    Bytes16(FixedBytes<'a, 16>),
    /// 32 raw bytes.
    Bytes32(FixedBytes<'a, 32>),
}

/// Forwards a call to whichever item the field holds.
macro_rules! dispatch {
    ($field:expr, $it:ident => $body:expr) => {
        match $field {
            Field::Padding($it) => $body,
            Field::Byte($it) => $body,
            Field::Bool($it) => $body,
            Field::U16($it) => $body,
            Field::I16($it) => $body,
            Field::U32($it) => $body,
            Field::I32($it) => $body,
            Field::U64($it) => $body,
            Field::I64($it) => $body,
            Field::Uvarint32($it) => $body,
            Field::Uvarint64($it) => $body,
            Field::Varint64($it) => $body,
            Field::OrdUvarint64($it) => $body,
            Field::OrdVarint64($it) => $body,
            Field::Bytes($it) => $body,
            Field::Str($it) => $body,
            Field::Bytes16($it) => $body,
            Field::Bytes32($it) => $body,
        }
    };
}

impl Item for Field<'_> {
    fn size(&self) -> usize {
        dispatch!(self, it => it.size())
    }

    fn encode(&self, buf: &mut [u8]) {
        dispatch!(self, it => it.encode(buf))
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        dispatch!(self, it => it.decode(buf))
    }
}

impl<'a> Field<'a> {
    /// Skips `n` bytes.
    pub fn padding(n: usize) -> Self {
        Self::Padding(Padding(n))
    }

    /// Binds a raw byte.
    pub fn byte(v: &'a mut u8) -> Self {
        Self::Byte(Byte(v))
    }

    /// Binds a bool.
    pub fn bool(v: &'a mut bool) -> Self {
        Self::Bool(Bool(v))
    }

    /// Binds a big-endian u16.
    pub fn be_u16(v: &'a mut u16) -> Self {
        Self::U16(BigEndian(v))
    }

    /// Binds a big-endian i16.
    pub fn be_i16(v: &'a mut i16) -> Self {
        Self::I16(BigEndian(v))
    }

    /// Binds a big-endian u32.
    pub fn be_u32(v: &'a mut u32) -> Self {
        Self::U32(BigEndian(v))
    }

    /// Binds a big-endian i32.
    pub fn be_i32(v: &'a mut i32) -> Self {
        Self::I32(BigEndian(v))
    }

    /// Binds a big-endian u64.
    pub fn be_u64(v: &'a mut u64) -> Self {
        Self::U64(BigEndian(v))
    }

    /// Binds a big-endian i64.
    pub fn be_i64(v: &'a mut i64) -> Self {
        Self::I64(BigEndian(v))
    }

    /// Binds a u32 as a conventional varint.
    pub fn uvarint32(v: &'a mut u32) -> Self {
        Self::Uvarint32(Uvarint32(v))
    }

    /// Binds a u64 as a conventional varint.
    pub fn uvarint64(v: &'a mut u64) -> Self {
        Self::Uvarint64(Uvarint64(v))
    }

    /// Binds an i64 as a zigzag varint.
    pub fn varint64(v: &'a mut i64) -> Self {
        Self::Varint64(Varint64(v))
    }

    /// Binds a u64 as an ordered varint.
    pub fn ord_uvarint64(v: &'a mut u64) -> Self {
        Self::OrdUvarint64(OrdUvarint64(v))
    }

    /// Binds an i64 as an ordered varint.
    pub fn ord_varint64(v: &'a mut i64) -> Self {
        Self::OrdVarint64(OrdVarint64(v))
    }

    /// Binds a length-tagged byte vec.
    pub fn bytes(v: &'a mut Vec<u8>) -> Self {
        Self::Bytes(LengthDelimBytes(v))
    }

    /// Binds a length-tagged string.
    pub fn string(v: &'a mut String) -> Self {
        Self::Str(LengthDelimString(v))
    }

    /// Binds 16 raw bytes.
    pub fn bytes16(v: &'a mut [u8; 16]) -> Self {
        Self::Bytes16(FixedBytes(v))
    }

    /// Binds 32 raw bytes.
    pub fn bytes32(v: &'a mut [u8; 32]) -> Self {
        Self::Bytes32(FixedBytes(v))
    }
}

/// Generates `From` impls lifting an item into its field variant.
macro_rules! impl_field_from {
    ($($variant:ident($item:ty)),* $(,)?) => {
        $(
            impl<'a> From<$item> for Field<'a> {
                fn from(it: $item) -> Self {
                    Self::$variant(it)
                }
            }
        )*
    };
}

impl_field_from! {
    Padding(Padding),
    Byte(Byte<'a>),
    Bool(Bool<'a>),
    U16(BigEndian<'a, u16>),
    I16(BigEndian<'a, i16>),
    U32(BigEndian<'a, u32>),
    I32(BigEndian<'a, i32>),
    U64(BigEndian<'a, u64>),
    I64(BigEndian<'a, i64>),
    Uvarint32(Uvarint32<'a>),
    Uvarint64(Uvarint64<'a>),
    Varint64(Varint64<'a>),
    OrdUvarint64(OrdUvarint64<'a>),
    OrdVarint64(OrdVarint64<'a>),
    Bytes(LengthDelimBytes<'a>),
    Str(LengthDelimString<'a>),
    Bytes16(FixedBytes<'a, 16>),
    Bytes32(FixedBytes<'a, 32>),
}
