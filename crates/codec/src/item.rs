use crate::CodecError;

/// A unit that knows how to size, write and parse one bound value.
///
/// Implementors hold an exclusive borrow of the value they describe, so one
/// item list can drive both directions: [`Item::encode`] reads the value and
/// [`Item::decode`] overwrites it.
pub trait Item {
    /// Number of bytes [`Item::encode`] will write for the current value.
    fn size(&self) -> usize;

    /// Encodes the bound value into the front of `buf`.
    ///
    /// # Panics
    ///
    /// If `buf` is shorter than [`Item::size`].
    fn encode(&self, buf: &mut [u8]);

    /// Decodes from the front of `buf` into the bound value, returning the
    /// number of bytes consumed.  `buf` may extend past this item's bytes.
    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError>;
}

/// Returns the first `n` bytes of `buf`, or [`CodecError::OverrunInput`].
pub(crate) fn take(buf: &[u8], n: usize) -> Result<&[u8], CodecError> {
    buf.get(..n).ok_or(CodecError::OverrunInput)
}
