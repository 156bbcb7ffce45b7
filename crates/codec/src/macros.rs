//! Simple macros for declaring sequence layouts.

/// Generates a struct along with a `sequence` fn that lays out its fields in
/// declaration order, each through the named [`crate::Field`] constructor.
///
/// ```ignore
/// impl_sequence_struct! {
///     #[derive(Clone, Debug, Default)]
///     pub struct Entry {
///         key: u64 => ord_uvarint64,
///         name: String => string,
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_sequence_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty => $kind:ident,
            )*
        }
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fname : $fty,
            )*
        }

        impl $name {
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }

            $(
                $v fn $fname(&self) -> &$fty {
                    &self.$fname
                }
            )*

            /// Builds the wire layout, borrowing every field.
            $v fn sequence(&mut self) -> $crate::Sequence<'_> {
                $crate::Sequence::new(vec![
                    $( $crate::Field::$kind(&mut self.$fname) ),*
                ])
            }

            /// Encodes the fields into a new buffer.
            $v fn to_bytes(&mut self) -> Vec<u8> {
                self.sequence().encode()
            }

            /// Decodes the fields in place, returning the bytes consumed.
            $v fn decode_from(&mut self, buf: &[u8]) -> Result<usize, $crate::CodecError> {
                self.sequence().decode(buf)
            }
        }
    }
}
