//! Composes a list of fields into one contiguous buffer.

use tracing::trace;

use crate::errors::CodecError;
use crate::field::Field;
use crate::item::Item;

/// Ordered list of fields describing one structure's layout.
///
/// Built fresh for each encode or decode, borrowing the structure's values.
/// Both sides must build the same list; nothing in the bytes says which
/// field comes next.
#[derive(Debug, Default)]
pub struct Sequence<'a> {
    items: Vec<Field<'a>>,
}

impl<'a> Sequence<'a> {
    /// Constructs a new instance from fields, in wire order.
    pub fn new(items: Vec<Field<'a>>) -> Self {
        Self { items }
    }

    /// Appends a field to the end of the layout.
    pub fn push(&mut self, field: impl Into<Field<'a>>) {
        self.items.push(field.into());
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total encoded size of the current values.
    pub fn size(&self) -> usize {
        self.items.iter().map(Item::size).sum()
    }

    /// Encodes every field into a newly allocated buffer of exactly
    /// [`Self::size`] bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0; self.size()];
        self.encode_fields(&mut buf);
        buf
    }

    /// Encodes every field into the front of `buf`, returning the bytes
    /// written.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, CodecError> {
        let size = self.size();
        let dest = buf.get_mut(..size).ok_or(CodecError::OverrunInput)?;
        self.encode_fields(dest);
        Ok(size)
    }

    /// Writes each field into its own sub-slice.  `buf` must be at least
    /// [`Self::size`] long.
    fn encode_fields(&self, buf: &mut [u8]) {
        let mut at = 0;
        for item in &self.items {
            let size = item.size();
            item.encode(&mut buf[at..at + size]);
            at += size;
        }
    }

    /// Decodes every field in order from the front of `buf`, returning the
    /// bytes consumed.
    ///
    /// Stops at the first failing field and returns its error.  Fields before
    /// it have already been overwritten and fields after it are untouched.
    ///
    /// A field that decodes from an over-long encoding is rejected as
    /// [`CodecError::Malformed`], since its bytes would not re-encode the same
    /// way.  Its value has already been overwritten at that point.
    pub fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let mut cur = Cursor::new(buf);
        for (idx, item) in self.items.iter_mut().enumerate() {
            let consumed = item.decode(cur.rest()).inspect_err(|err| {
                trace!(field = idx, at = cur.at, %err, "sequence decode stopped");
            })?;

            // Variable sized fields are only sized after they've been decoded.
            let size = item.size();
            if consumed != size {
                let err = CodecError::Malformed("non-canonical field");
                trace!(field = idx, at = cur.at, consumed, size, %err, "sequence decode stopped");
                return Err(err);
            }
            cur.advance(consumed);
        }

        Ok(cur.at)
    }
}

impl<'a> FromIterator<Field<'a>> for Sequence<'a> {
    fn from_iter<I: IntoIterator<Item = Field<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Item for Sequence<'_> {
    fn size(&self) -> usize {
        Sequence::size(self)
    }

    fn encode(&self, buf: &mut [u8]) {
        self.encode_fields(buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        Sequence::decode(self, buf)
    }
}

/// Read position over a flat buffer.
#[derive(Debug)]
struct Cursor<'b> {
    buf: &'b [u8],
    at: usize,
}

impl<'b> Cursor<'b> {
    fn new(buf: &'b [u8]) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    fn rest(&self) -> &'b [u8] {
        &self.buf[self.at..]
    }

    /// Advances by `n`.  Callers only pass lengths an item has just read
    /// from [`Self::rest`].
    fn advance(&mut self, n: usize) {
        self.at += n;
    }
}
