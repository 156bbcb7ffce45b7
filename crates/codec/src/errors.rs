use thiserror::Error;

/// Errors from ordenc-codec.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// If we tried to read past the end of the underlying buffer.
    #[error("would overrun end of input")]
    OverrunInput,

    /// If the bytes were structurally invalid for the item reading them.
    #[error("malformed {0} encoding")]
    Malformed(&'static str),
}
