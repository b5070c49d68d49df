use crate::de::{from_reader_with_depth, read_root};
use crate::error::{Category, Error, Result};
use crate::{
    from_bytes, from_reader, from_reader_with, tag, to_bytes, ByteArray, Compound, Compression,
    IntArray, Kind, List, LongArray, Tag,
};

use super::wire::Wire;

fn root_of(payload: &[u8]) -> Compound {
    let wrapper = from_bytes(payload).unwrap();
    let via_reader = from_reader(payload).unwrap();
    assert_eq!(wrapper, via_reader);
    wrapper.get_compound("").unwrap().clone()
}

#[test]
fn error_impls_send_sync() {
    fn i<T: Send + Sync + std::error::Error>(_: T) {}
    i(Error::UnknownKind(13));
}

#[test]
fn simple_byte() {
    let payload = Wire::new()
        .compound("")
        .entry("abc", Tag::Byte(123))
        .entry("def", Tag::Byte(111))
        .end()
        .build();

    let root = root_of(&payload);
    assert_eq!(root.get_byte("abc").unwrap(), 123);
    assert_eq!(root.get_byte("def").unwrap(), 111);
}

#[test]
fn wrapper_holds_root_under_its_name() {
    let payload = Wire::new()
        .compound("object")
        .entry("f", Tag::Float(1.23))
        .entry("d", Tag::Double(2.34))
        .end()
        .build();

    let wrapper = from_bytes(&payload).unwrap();
    assert_eq!(wrapper.len(), 1);
    let root = wrapper.get_compound("object").unwrap();
    assert_eq!(root.get_float("f").unwrap(), 1.23);
    assert_eq!(root.get_double("d").unwrap(), 2.34);

    let (name, root) = read_root(&payload[..], Compression::Uncompressed, 512).unwrap();
    assert_eq!(name, "object");
    assert_eq!(root.len(), 2);
}

#[test]
fn nested_compound() {
    let payload = Wire::new()
        .compound("")
        .compound("nested")
        .entry("n", Tag::Int(5))
        .end()
        .end()
        .build();

    let root = root_of(&payload);
    assert_eq!(root.get_compound("nested").unwrap().get_int("n").unwrap(), 5);
}

#[test]
fn list_of_compounds() {
    let payload = Wire::new()
        .compound("")
        .list("list", Kind::Compound, 2)
        .entry("a", Tag::Int(1))
        .end()
        .entry("a", Tag::Int(2))
        .end()
        .end()
        .build();

    let root = root_of(&payload);
    let list = root.get_list("list").unwrap();
    assert_eq!(list.kind(), Some(Kind::Compound));
    assert_eq!(list.get_compound(1).unwrap().get_int("a").unwrap(), 2);
}

#[test]
fn arrays() {
    let payload = Wire::new()
        .compound("")
        .entry("b", ByteArray::new(vec![1, 2, -3]))
        .entry("i", IntArray::new(vec![i32::MIN, 0]))
        .entry("l", LongArray::new(vec![i64::MAX]))
        .end()
        .build();

    let root = root_of(&payload);
    assert_eq!(&root.get_byte_array("b").unwrap()[..], &[1, 2, -3]);
    assert_eq!(&root.get_int_array("i").unwrap()[..], &[i32::MIN, 0]);
    assert_eq!(&root.get_long_array("l").unwrap()[..], &[i64::MAX]);
}

#[test]
fn empty_list_of_end() {
    let payload = Wire::new()
        .compound("")
        .list("l", Kind::End, 0)
        .end()
        .build();

    let root = root_of(&payload);
    assert_eq!(root.get_list("l").unwrap().kind(), None);
}

#[test]
fn legacy_empty_lists_accept_any_kind_and_count() {
    let payload = Wire::new()
        .compound("")
        .list("typed", Kind::Short, 0)
        .list("negative", Kind::Int, -5)
        .list("end", Kind::End, -1)
        .end()
        .build();

    let root = root_of(&payload);
    assert_eq!(root.get_list("typed").unwrap().kind(), Some(Kind::Short));
    assert!(root.get_list("negative").unwrap().is_empty());
    assert_eq!(root.get_list("end").unwrap().kind(), None);
}

#[test]
fn list_of_end_with_elements_errors() {
    let payload = Wire::new()
        .compound("")
        .list("", Kind::End, 1)
        .kind(Kind::End)
        .end()
        .build();

    assert!(matches!(from_bytes(&payload), Err(Error::UnexpectedEnd)));
}

#[test]
fn unknown_kind_errors() {
    let payload = Wire::new()
        .compound("")
        .raw(&[13])
        .str("x")
        .end()
        .build();

    let err = from_bytes(&payload).unwrap_err();
    assert!(matches!(err, Error::UnknownKind(13)));
    assert_eq!(err.category(), Category::MalformedWire);
}

#[test]
fn root_must_be_compound() {
    let payload = Wire::new().entry("", Tag::Int(1)).build();
    assert!(matches!(
        from_bytes(&payload),
        Err(Error::NoRootCompound(Kind::Int))
    ));
}

#[test]
fn negative_array_length_errors() {
    let payload = Wire::new()
        .compound("")
        .header(Kind::IntArray, "i")
        .len(-1)
        .end()
        .build();

    assert!(matches!(from_bytes(&payload), Err(Error::NegativeLength(-1))));
}

#[test]
fn truncated_input_is_unexpected_eof() {
    let payload = Wire::new()
        .compound("")
        .entry("abc", Tag::Int(1))
        .end()
        .build();

    for end in 0..payload.len() {
        let err = from_bytes(&payload[..end]).unwrap_err();
        assert!(
            matches!(err, Error::UnexpectedEof),
            "cut at {}: {:?}",
            end,
            err
        );
        assert_eq!(err.category(), Category::MalformedWire);
    }
}

#[test]
fn huge_declared_array_does_not_allocate_up_front() {
    let payload = Wire::new()
        .compound("")
        .header(Kind::LongArray, "l")
        .len(i32::MAX)
        .payload(&Tag::Long(1))
        .build();

    assert!(matches!(from_bytes(&payload), Err(Error::UnexpectedEof)));
}

#[test]
fn trailing_bytes_are_ignored() {
    let payload = Wire::new()
        .compound("")
        .end()
        .raw(&[1, 2, 3, 4])
        .build();

    assert!(root_of(&payload).is_empty());
}

#[test]
fn cesu8_string() {
    let modified_unicode_str = cesu8::to_java_cesu8("😈");
    let payload = Wire::new()
        .compound("")
        .header(Kind::String, "hello")
        .str_len(modified_unicode_str.len())
        .raw(&modified_unicode_str)
        .end()
        .build();

    assert_eq!(root_of(&payload).get_string("hello").unwrap(), "😈");
}

#[test]
fn invalid_modified_utf8_errors() {
    let payload = Wire::new()
        .compound("")
        .header(Kind::String, "s")
        .str_len(1)
        .raw(&[0xff])
        .end()
        .build();

    assert!(matches!(from_bytes(&payload), Err(Error::Nonunicode(_))));
}

#[test]
fn detects_compression() {
    for scheme in [Compression::Gzip, Compression::Zlib] {
        let bs = Wire::new()
            .compound("")
            .entry("n", Tag::Int(42))
            .end()
            .compressed(scheme);

        let root = root_of(&bs);
        assert_eq!(root.get_int("n").unwrap(), 42);
        let explicit = from_reader_with(&bs[..], scheme).unwrap();
        assert_eq!(explicit.get_compound("").unwrap(), &root);
    }
}

#[test]
fn depth_limit_rejects_deep_streams() {
    let payload = Wire::new()
        .compound("")
        .compound("a")
        .compound("b")
        .end()
        .end()
        .end()
        .build();

    // `b` is at depth 2 and has no children, so a budget of 2 is enough.
    assert!(from_reader_with_depth(&payload[..], Compression::Uncompressed, 2).is_ok());
    let err = from_reader_with_depth(&payload[..], Compression::Uncompressed, 1).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded(1)));
}

#[test]
fn depth_limit_applies_to_lists() {
    let payload = Wire::new()
        .compound("")
        .list("l", Kind::Int, 1)
        .payload(&Tag::Int(1))
        .end()
        .build();

    assert!(from_reader_with_depth(&payload[..], Compression::Uncompressed, 2).is_ok());
    assert!(from_reader_with_depth(&payload[..], Compression::Uncompressed, 1).is_err());
}

#[test]
fn round_trip_every_scheme() -> Result<()> {
    let tree = match tag!({
        "byte": 1i8,
        "short": -2i16,
        "int": 3,
        "long": i64::MIN,
        "float": 1.5f32,
        "double": f64::MAX,
        "string": "Hello, 世界",
        "bytes": [B; 1, 2],
        "ints": [I;],
        "longs": [L; 5],
        "list": [[1], [2, 3]],
        "empty": [],
        "compounds": [{"id": "a"}, {"id": "b", "nested": {"deep": [1.0, 2.0]}}],
    }) {
        Tag::Compound(c) => c,
        _ => unreachable!(),
    };

    for scheme in [
        Compression::Gzip,
        Compression::Zlib,
        Compression::Uncompressed,
    ] {
        let bs = to_bytes("root", &tree, scheme)?;
        let wrapper = from_bytes(&bs)?;
        assert_eq!(wrapper.get_compound("root")?, &tree);
    }
    Ok(())
}

#[test]
fn depth_truncation_round_trips_to_empty_containers() -> Result<()> {
    let mut tree = Compound::new();
    tree.put("a", tag!({"b": {"c": {"d": 1}}, "l": [[1]]}));

    let bs = crate::ser::to_bytes_with_depth("", &tree, Compression::Uncompressed, 2)?;
    let back = from_bytes(&bs)?;
    let a = back.get_compound("")?.get_compound("a")?;

    assert!(a.get_compound("b")?.is_empty());
    assert_eq!(a.get_list("l")?.kind(), Some(Kind::List));
    assert!(a.get_list("l")?.is_empty());
    assert_eq!(a.get_list("l")?, &List::new());
    Ok(())
}
