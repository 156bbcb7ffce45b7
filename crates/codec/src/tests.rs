#![allow(unreachable_pub)] // testing the macro
#![expect(unused)] // testing the macro

use crate::{CodecError, impl_sequence_struct};

impl_sequence_struct! {
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Foo {
        a: u16 => be_u16,
        b: String => string,
        c: bool => bool,
    }
}

impl_sequence_struct! {
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct Keyed {
        shard: u64 => ord_uvarint64,
        offset: i64 => ord_varint64,
        digest: [u8; 16] => bytes16,
    }
}

#[test]
fn test_macro_gen() {
    let mut f = Foo::new(12345, "hey".to_owned(), true);

    let t1 = (12345u16 >> 8) as u8;
    let t2 = (12345u16 & 0xff) as u8;

    let s = format!("{f:?}");
    assert_eq!(s, "Foo { a: 12345, b: \"hey\", c: true }");

    let b = f.to_bytes();
    assert_eq!(&b, &[t1, t2, 3, b'h', b'e', b'y', 1]);
    assert_eq!(b.len(), f.sequence().size());

    let mut g = Foo::default();
    assert_eq!(g.decode_from(&b), Ok(b.len()));
    assert_eq!(f, g);
    assert_eq!(g.b(), "hey");
}

#[test]
fn test_macro_truncated() {
    let mut f = Foo::new(1, "abc".to_owned(), false);
    let b = f.to_bytes();

    let mut g = Foo::default();
    assert_eq!(g.decode_from(&b[..b.len() - 1]), Err(CodecError::OverrunInput));
    assert_eq!(*g.a(), 1, "fields ahead of the failure were written");
    assert_eq!(g.b(), "abc");
}

#[test]
fn test_macro_ordered_keys() {
    let mut lo = Keyed::new(5, -1, [0; 16]);
    let mut hi = Keyed::new(5, 0, [0; 16]);
    assert!(lo.to_bytes() < hi.to_bytes());

    let mut hi = Keyed::new(6, -1_000_000, [0; 16]);
    assert!(lo.to_bytes() < hi.to_bytes());
}
