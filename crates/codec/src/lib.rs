//! Composable binary item codecs, including order-preserving varints.
//!
//! A structure's layout is a [`Sequence`] of [`Field`]s, each borrowing one
//! of its values.  The same sequence encodes the values into one buffer or
//! decodes a buffer back into them.
//!
//! ```ignore
//! let mut seq = Sequence::new(vec![
//!     Field::be_u16(&mut foo.a),
//!     Field::string(&mut foo.b),
//!     Field::bool(&mut foo.c),
//! ]);
//! let buf = seq.encode();
//! seq.decode(&buf)?;
//! ```

mod errors;
pub use errors::CodecError;

mod item;
pub use item::Item;

mod fixed;
pub use fixed::{BigEndian, Bool, Byte, FixedBytes, Padding};

pub mod varint;
pub use varint::{Uvarint32, Uvarint64, Varint64};

pub mod ord_varint;
pub use ord_varint::{
    ORD_UVARINT_MAX_LEN, OrdUvarint64, encode_ord_uvarint, ord_uvarint_len, put_ord_uvarint,
    read_ord_uvarint,
};

pub mod ord_varint_signed;
pub use ord_varint_signed::{
    ORD_VARINT_MAX_LEN, OrdVarint64, encode_ord_varint, ord_varint_len, put_ord_varint,
    read_ord_varint,
};

mod delim;
pub use delim::{LengthDelimBytes, LengthDelimString};

mod field;
pub use field::Field;

mod sequence;
pub use sequence::Sequence;

mod macros;

mod util;
pub use util::{decode_prefix, encode_to_vec};

#[cfg(test)]
mod tests;
