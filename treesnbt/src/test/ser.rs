use treenbt::{tag, ByteArray, Compound, IntArray, List, LongArray, Tag};

use crate::{
    from_str, tag_to_string, to_colored_string, to_string, value_from_str, Palette, Stringifier,
};

use super::compound;

#[test]
fn scalars() {
    assert_eq!(tag_to_string(&Tag::Byte(3)), "3b");
    assert_eq!(tag_to_string(&Tag::Short(-5)), "-5s");
    assert_eq!(tag_to_string(&Tag::Int(-3)), "-3");
    assert_eq!(tag_to_string(&Tag::Long(5)), "5l");
    assert_eq!(tag_to_string(&Tag::Float(1.5)), "1.5f");
    assert_eq!(tag_to_string(&Tag::Double(2.0)), "2.0d");
}

#[test]
fn strings_are_always_quoted() {
    assert_eq!(tag_to_string(&Tag::String("abc".into())), r#""abc""#);
    assert_eq!(tag_to_string(&Tag::String("123".into())), r#""123""#);
    assert_eq!(tag_to_string(&Tag::String("".into())), r#""""#);
    assert_eq!(
        tag_to_string(&Tag::String(r#"a"b\c"#.into())),
        r#""a\"b\\c""#
    );
}

#[test]
fn keys_are_quoted_when_needed() {
    assert_eq!(to_string(&compound(tag!({"Count": 3i8}))), "{Count: 3b}");
    assert_eq!(to_string(&compound(tag!({"a b": 1}))), r#"{"a b": 1}"#);
    assert_eq!(to_string(&compound(tag!({"": 1}))), r#"{"": 1}"#);
    assert_eq!(
        to_string(&compound(tag!({"minecraft:id": 1}))),
        r#"{"minecraft:id": 1}"#
    );
    assert_eq!(to_string(&compound(tag!({"a.b-c_d+1": 1}))), "{a.b-c_d+1: 1}");
}

#[test]
fn lists() {
    assert_eq!(tag_to_string(&tag!([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(tag_to_string(&Tag::List(List::new())), "[]");
    assert_eq!(tag_to_string(&tag!([[1i8], []])), "[[1b], []]");
    assert_eq!(tag_to_string(&tag!([{}])), "[{}]");
}

#[test]
fn arrays() {
    assert_eq!(
        tag_to_string(&Tag::ByteArray(ByteArray::new(vec![1, -2]))),
        "[B; 1B, -2B]"
    );
    assert_eq!(
        tag_to_string(&Tag::IntArray(IntArray::new(vec![1, 2]))),
        "[I; 1, 2]"
    );
    assert_eq!(
        tag_to_string(&Tag::LongArray(LongArray::new(vec![5]))),
        "[L; 5L]"
    );
    assert_eq!(tag_to_string(&Tag::IntArray(IntArray::new(vec![]))), "[I;]");
}

#[test]
fn empty_compound() {
    assert_eq!(to_string(&Compound::new()), "{}");
}

#[test]
fn depth_limit_empties_containers() {
    let tree = tag!({"a": {"b": {"c": 1}}, "l": [[1]]});

    let s = Stringifier::new().max_depth(0).stringify(&tree);
    assert_eq!(s, "{}");

    let one = Stringifier::new().max_depth(2);
    let nested = tag!({"a": {"b": {"c": 1}}});
    assert_eq!(one.stringify(&nested), "{a: {b: {}}}");

    let list = tag!({"l": [[1]]});
    assert_eq!(one.stringify(&list), "{l: [[]]}");

    // Arrays are leaves and never truncated.
    let arr = Tag::IntArray(IntArray::new(vec![1, 2]));
    assert_eq!(Stringifier::new().max_depth(0).stringify(&arr), "[I; 1, 2]");
}

#[test]
fn section_sign_colors() {
    assert_eq!(
        to_colored_string(&compound(tag!({"n": 1i8}))),
        "§f{§bn§f: §61§cb§f}"
    );
    assert_eq!(
        to_colored_string(&compound(tag!({"s": "x"}))),
        "§f{§bs§f: §f\"§ax§f\"§f}"
    );
    assert_eq!(
        to_colored_string(&compound(tag!({"i": 7}))),
        "§f{§bi§f: §67§f}"
    );
}

#[test]
fn custom_palette() {
    let palette = Palette {
        punctuation: "<p>".into(),
        string: "<s>".into(),
        key: "<k>".into(),
        number: "<n>".into(),
        suffix: "<x>".into(),
    };
    let s = Stringifier::new()
        .palette(palette)
        .stringify(&Tag::ByteArray(ByteArray::new(vec![1])));
    assert_eq!(s, "<p>[<x>B<p>; <n>1<x>B<p>]");
}

#[test]
fn plain_palette_is_default() {
    assert_eq!(Palette::default(), Palette::plain());
    let tree = tag!({"a": [1.5f32]});
    assert_eq!(
        Stringifier::default().stringify(&tree),
        Stringifier::new().palette(Palette::plain()).stringify(&tree)
    );
}

#[test]
fn ansi_palette_differs_from_plain() {
    let tree = tag!({"a": 1});
    let s = Stringifier::new().palette(Palette::ansi()).stringify(&tree);
    assert!(s.starts_with("\x1b["));
    assert!(s.contains('a'));
}

#[test]
fn round_trip() {
    let tree = compound(tag!({
        "byte": 1i8,
        "short": -300i16,
        "int": 70000,
        "long": 1i64 << 40,
        "float": 0.1f32,
        "double": -1.0e-7,
        "string": "with \"quotes\" and \\ and 日本",
        "numeric string": "42",
        "weird key: {}": true,
        "list": [[1, 2], [3]],
        "compounds": [{"a": 1}, {"b": "c"}],
        "empty": [],
        "bytes": [B; 1, -1],
        "ints": [I; 1, 2, 3],
        "longs": [L; -5],
        "nested": {"deeper": {"deepest": {}}},
    }));

    let text = to_string(&tree);
    assert_eq!(from_str(&text).unwrap(), tree);
}

#[test]
fn value_round_trip() {
    for input in ["5b", "[1, 2]", "[L; 1L]", r#""x""#, "{}", "1.0E10d", "-0.5f"] {
        let tag = value_from_str(input).unwrap();
        assert_eq!(value_from_str(&tag_to_string(&tag)).unwrap(), tag);
    }
}
