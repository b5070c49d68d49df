use crate::error::{Category, Error};
use crate::ser::{to_bytes, to_bytes_with_depth};
use crate::{
    tag, ByteArray, Compound, Compression, IntArray, Kind, List, LongArray, Tag, DEFAULT_MAX_DEPTH,
};

use super::wire::Wire;

fn single(name: &str, value: impl Into<Tag>) -> Compound {
    let mut c = Compound::new();
    c.put(name, value);
    c
}

fn raw(c: &Compound) -> Vec<u8> {
    to_bytes("", c, Compression::Uncompressed).unwrap()
}

#[test]
fn empty_root() {
    let bs = raw(&Compound::new());
    let expected = Wire::new().compound("").end().build();
    assert_eq!(expected, bs);
}

#[test]
fn root_name_is_written() {
    let bs = to_bytes("Level", &Compound::new(), Compression::Uncompressed).unwrap();
    let expected = Wire::new().compound("Level").end().build();
    assert_eq!(expected, bs);
}

#[test]
fn simple_numbers() {
    let cases = [
        Tag::Byte(i8::MAX),
        Tag::Short(i16::MIN),
        Tag::Int(i32::MAX),
        Tag::Long(i64::MIN),
        Tag::Float(f32::MAX),
        Tag::Double(-0.5),
    ];

    for tag in cases {
        let bs = raw(&single("v", tag.clone()));
        let expected = Wire::new().compound("").entry("v", tag).end().build();
        assert_eq!(expected, bs);
    }

    // short id, name, big endian value
    let bs = raw(&single("v", 258i16));
    assert_eq!(&bs[3..9], &[2, 0, 1, b'v', 1, 2]);
}

#[test]
fn simple_string() {
    let bs = raw(&single("val", "hello"));
    let expected = Wire::new()
        .compound("")
        .entry("val", "hello")
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn strings_are_modified_utf8() {
    // Nul and characters outside the BMP differ from plain UTF-8.
    let s = "a\0😀";
    let bs = raw(&single("s", s));
    let expected = Wire::new()
        .compound("")
        .header(Kind::String, "s")
        .str_len(9)
        .raw(&[b'a', 0xc0, 0x80, 0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80])
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn arrays() {
    let bs = raw(&single("b", tag!([B; 1, -1])));
    let expected = Wire::new()
        .compound("")
        .entry("b", ByteArray::new(vec![1, -1]))
        .end()
        .build();
    assert_eq!(expected, bs);

    let bs = raw(&single("i", tag!([I; 1, 2, 3])));
    let expected = Wire::new()
        .compound("")
        .entry("i", IntArray::new(vec![1, 2, 3]))
        .end()
        .build();
    assert_eq!(expected, bs);

    let bs = raw(&single("l", tag!([L; i64::MAX])));
    let expected = Wire::new()
        .compound("")
        .entry("l", LongArray::new(vec![i64::MAX]))
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn list_of_ints() {
    let bs = raw(&single("l", tag!([1, 2])));
    let expected = Wire::new()
        .compound("")
        .list("l", Kind::Int, 2)
        .payload(&Tag::Int(1))
        .payload(&Tag::Int(2))
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn list_of_compounds() {
    let bs = raw(&single("l", tag!([{"a": 1}, {}])));
    let expected = Wire::new()
        .compound("")
        .list("l", Kind::Compound, 2)
        .entry("a", Tag::Int(1))
        .end()
        .end()
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn untyped_list_is_end_kind() {
    let bs = raw(&single("l", List::new()));
    let expected = Wire::new()
        .compound("")
        .list("l", Kind::End, 0)
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn empty_typed_list_keeps_kind() {
    let bs = raw(&single("l", List::with_kind(Kind::String).unwrap()));
    let expected = Wire::new()
        .compound("")
        .list("l", Kind::String, 0)
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn depth_truncates_compounds() {
    let root = single("a", tag!({"b": {"c": 1}}));

    // Root body at depth 2: `a` gets 1 for its children, so `b` is written
    // but its body is just the terminator.
    let bs = to_bytes_with_depth("", &root, Compression::Uncompressed, 2).unwrap();
    let expected = Wire::new()
        .compound("")
        .compound("a")
        .compound("b")
        .end()
        .end()
        .end()
        .build();
    assert_eq!(expected, bs);
}

// Compounds `levels` deep below the root, the innermost holding `leaf: 1`.
fn nested(levels: usize) -> Compound {
    (0..levels).fold(single("leaf", 1), |inner, _| single("n", inner))
}

fn leaf_survives(levels: usize) -> bool {
    let bs = to_bytes("", &nested(levels), Compression::Uncompressed).unwrap();
    let mut c = crate::from_bytes(&bs).unwrap().get_compound("").unwrap().clone();
    for _ in 0..levels {
        c = c.get_compound("n").unwrap().clone();
    }
    c.contains_key("leaf")
}

#[test]
fn default_depth_covers_the_root_body() {
    // The root's own entries use one level of the budget, so the deepest
    // surviving entry is DEFAULT_MAX_DEPTH levels below the root.
    assert!(leaf_survives(DEFAULT_MAX_DEPTH - 1));
    assert!(!leaf_survives(DEFAULT_MAX_DEPTH));
}

#[test]
fn depth_zero_writes_empty_root() {
    let root = single("a", 1);
    let bs = to_bytes_with_depth("", &root, Compression::Uncompressed, 0).unwrap();
    let expected = Wire::new().compound("").end().build();
    assert_eq!(expected, bs);
}

#[test]
fn depth_truncates_lists_but_not_arrays() {
    let root = single("l", tag!([[1, 2], [3]]));
    let bs = to_bytes_with_depth("", &root, Compression::Uncompressed, 2).unwrap();
    let expected = Wire::new()
        .compound("")
        .list("l", Kind::List, 2)
        .elements(Kind::Int, 0)
        .elements(Kind::Int, 0)
        .end()
        .build();
    assert_eq!(expected, bs);

    let root = single("a", tag!({"arr": [I; 1, 2]}));
    let bs = to_bytes_with_depth("", &root, Compression::Uncompressed, 2).unwrap();
    let expected = Wire::new()
        .compound("")
        .compound("a")
        .entry("arr", IntArray::new(vec![1, 2]))
        .end()
        .end()
        .build();
    assert_eq!(expected, bs);
}

#[test]
fn long_string_errors() {
    let long = "a".repeat(u16::MAX as usize + 1);
    let err = to_bytes("", &single("s", long), Compression::Uncompressed).unwrap_err();
    assert!(matches!(err, Error::StringTooLong(65536)));
    assert_eq!(err.category(), Category::CapacityExceeded);
}

#[test]
fn max_length_string_fits() {
    let long = "a".repeat(u16::MAX as usize);
    assert!(to_bytes("", &single("s", long), Compression::Uncompressed).is_ok());
}

#[test]
fn compressed_output_decompresses_to_raw() {
    let root = single("v", 1);
    let plain = raw(&root);

    for scheme in [Compression::Gzip, Compression::Zlib] {
        let bs = to_bytes("", &root, scheme).unwrap();
        assert_eq!(Compression::detect(&bs), scheme);
        assert_eq!(scheme.decompress(&bs).unwrap(), plain);
    }
}
