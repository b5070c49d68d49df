use crate::{tag, ByteArray, Compound, IntArray, List, LongArray, Tag};

#[test]
fn tag() {
    assert_eq!(tag!(1_i8), Tag::Byte(1));
    assert_eq!(tag!(1_u8), Tag::Byte(1));
    assert_eq!(tag!(1_i16), Tag::Short(1));
    assert_eq!(tag!(1_u16), Tag::Short(1));
    assert_eq!(tag!(1), Tag::Int(1));
    assert_eq!(tag!(1_u32), Tag::Int(1));
    assert_eq!(tag!(1_i64), Tag::Long(1));
    assert_eq!(tag!(1_u64), Tag::Long(1));
    assert_eq!(tag!(1_f32), Tag::Float(1.0));
    assert_eq!(tag!(1.0), Tag::Double(1.0));
    assert_eq!(tag!(true), Tag::Byte(1));
    assert_eq!(tag!(false), Tag::Byte(0));

    assert_eq!(tag!("string"), Tag::String("string".to_owned()));
    assert_eq!(
        tag!("string".to_owned()),
        Tag::String("string".to_owned())
    );

    assert_eq!(tag!([]), Tag::List(List::new()));
    assert_eq!(
        tag!([1, 3]),
        Tag::List(List::from_tags(vec![Tag::Int(1), Tag::Int(3)]).unwrap())
    );

    assert_eq!(tag!({}), Tag::Compound(Compound::new()));

    let mut expected = Compound::new();
    expected.put("key1", "value1");
    expected.put("key2", 42);
    expected.put(
        "key3",
        List::from_tags(vec![Tag::Int(4), Tag::Int(2)]).unwrap(),
    );
    assert_eq!(
        tag!({
            "key1": "value1",
            "key2": 42,
            "key3": [4, 2],
        }),
        Tag::Compound(expected)
    );

    assert_eq!(tag!([B;]), Tag::ByteArray(ByteArray::new(vec![])));
    assert_eq!(tag!([I;]), Tag::IntArray(IntArray::new(vec![])));
    assert_eq!(tag!([L;]), Tag::LongArray(LongArray::new(vec![])));
    assert_eq!(
        tag!([B; 1, 2, 3]),
        Tag::ByteArray(ByteArray::new(vec![1, 2, 3]))
    );
    assert_eq!(tag!([I;1,2,3]), Tag::IntArray(IntArray::new(vec![1, 2, 3])));
    assert_eq!(tag!([L; 1, 2, 3,]), Tag::LongArray(LongArray::new(vec![1, 2, 3])));
}

#[test]
fn tag_with_variables() {
    let name = "Steve";
    let health = 20.0_f32;
    let pos = tag!([1.5, 64.0, -3.25]);

    let player = tag!({
        "Name": name,
        "Health": health,
        "Pos": pos.clone(),
    });

    let player = player.as_compound().unwrap();
    assert_eq!(player.get_string("Name").unwrap(), "Steve");
    assert_eq!(player.get_float("Health").unwrap(), 20.0);
    assert_eq!(player.get("Pos").unwrap(), &pos);
}

#[test]
#[should_panic(expected = "same kind")]
fn heterogeneous_list_panics() {
    let _ = tag!([1, "two"]);
}
