use std::convert::TryFrom;

use crate::error::Category;
use crate::Kind;

#[allow(clippy::float_cmp)]
mod de;


mod macros;
mod ser;
mod wire;

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Kind::$kind), $val);
            assert_eq!(Kind::from_id($val).unwrap(), Kind::$kind);
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        let err = Kind::try_from(value).unwrap_err();
        assert_eq!(err.category(), Category::MalformedWire);
    }
}

#[test]
fn kind_names() {
    assert_eq!(Kind::End.name(), "TAG_End");
    assert_eq!(Kind::ByteArray.name(), "TAG_Byte_Array");
    assert_eq!(Kind::LongArray.to_string(), "TAG_Long_Array");
    assert!(Kind::IntArray.is_array());
    assert!(!Kind::List.is_array());
    assert!(Kind::Double.is_numeric());
    assert!(!Kind::String.is_numeric());
}
