//! Property testing macros and utilities for ordenc-codec.
//!
//! This crate provides macros that generate property tests for any
//! [`ordenc_codec::Field`] kind.  The main exports are
//! `generate_item_tests!` and `generate_order_tests!`.

// Re-export dependencies for macro usage
pub use ordenc_codec;
pub use paste;
pub use proptest;

use proptest::prelude::{Strategy, any};

/// u64 values spread evenly over bit lengths, instead of nearly all landing
/// in the widest encoding like `any::<u64>()` does.
pub fn spread_u64() -> impl Strategy<Value = u64> {
    (any::<u64>(), 0u32..64).prop_map(|(v, shift)| v >> shift)
}

/// i64 values of both signs spread evenly over magnitudes.
pub fn spread_i64() -> impl Strategy<Value = i64> {
    (any::<i64>(), 0u32..64).prop_map(|(v, shift)| v >> shift)
}

/// Generates property tests for a value type bound through one of the
/// [`ordenc_codec::Field`] constructors.
///
/// This macro creates tests verifying that:
/// 1. Encoding then decoding produces the original value and consumes
///    exactly the encoded bytes
/// 2. The encoded length matches the reported size
/// 3. Dropping the last byte is always reported as an overrun
///
/// # Requirements
///
/// The type must implement `Clone + Default + Debug + PartialEq`, and either
/// `proptest::arbitrary::Arbitrary` or be given an explicit strategy.
///
/// # Example
/// ```rust,no_run
/// use ordenc_codec_tests::generate_item_tests;
///
/// generate_item_tests!(u64, ord_uvarint64, "ord_uvarint64");
/// generate_item_tests!(u64, uvarint64, "uvarint64_spread", ordenc_codec_tests::spread_u64());
/// ```
#[macro_export]
macro_rules! generate_item_tests {
    ($type:ty, $ctor:ident, $name:tt) => {
        $crate::generate_item_tests!(
            $type,
            $ctor,
            $name,
            $crate::proptest::prelude::any::<$type>()
        );
    };
    ($type:ty, $ctor:ident, $name:tt, $strategy:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _item>] {
                use super::*;
                use $crate::proptest::prelude::{prop_assert, prop_assert_eq, prop_assume};
                use $crate::ordenc_codec::{CodecError, Field, Sequence};

                fn encode(value: &$type) -> Vec<u8> {
                    let mut value = value.clone();
                    Sequence::new(vec![Field::$ctor(&mut value)]).encode()
                }

                fn decode(buf: &[u8]) -> Result<($type, usize), CodecError> {
                    let mut value = <$type>::default();
                    let n = Sequence::new(vec![Field::$ctor(&mut value)]).decode(buf)?;
                    Ok((value, n))
                }

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_item_roundtrip>](value in $strategy) {
                        let encoded = encode(&value);
                        let (decoded, n) = decode(&encoded).expect("test: decoding should succeed");
                        prop_assert_eq!(n, encoded.len());
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_item_size>](value in $strategy) {
                        let mut copy = value.clone();
                        let size = Sequence::new(vec![Field::$ctor(&mut copy)]).size();
                        prop_assert_eq!(size, encode(&value).len());
                    }

                    #[test]
                    fn [<test_item_truncated>](value in $strategy) {
                        let encoded = encode(&value);
                        prop_assume!(!encoded.is_empty());
                        let res = decode(&encoded[..encoded.len() - 1]);
                        prop_assert!(
                            matches!(res, Err(CodecError::OverrunInput)),
                            "test: truncated decode gave {:?}",
                            res
                        );
                    }
                }
            }
        }
    };
}

/// Generates a property test checking that the byte-wise order of encodings
/// matches the order of the values.
///
/// # Example
/// ```rust,no_run
/// use ordenc_codec_tests::{generate_order_tests, spread_i64};
///
/// generate_order_tests!(i64, ord_varint64, "ord_varint64", spread_i64());
/// ```
#[macro_export]
macro_rules! generate_order_tests {
    ($type:ty, $ctor:ident, $name:tt, $strategy:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _order>] {
                use super::*;
                use $crate::proptest::prelude::{prop_assert_eq, prop_assume};
                use $crate::ordenc_codec::{Field, Sequence};

                fn encode(value: &$type) -> Vec<u8> {
                    let mut value = value.clone();
                    Sequence::new(vec![Field::$ctor(&mut value)]).encode()
                }

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_item_order>](a in $strategy, b in $strategy) {
                        prop_assume!(a != b);
                        prop_assert_eq!(a.cmp(&b), encode(&a).cmp(&encode(&b)));
                    }

                    #[test]
                    fn [<test_item_order_adjacent>](a in $strategy) {
                        if let Some(b) = a.checked_add(1) {
                            prop_assert_eq!(encode(&a).cmp(&encode(&b)), std::cmp::Ordering::Less);
                        }
                    }
                }
            }
        }
    };
}
