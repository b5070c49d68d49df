use std::convert::TryInto;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{Compound, Compression, Kind, Level, List, Tag};

/// Hand-assembled NBT bytes. Whatever the calls describe is written, valid
/// or not, so tests can feed the reader streams the writer never makes.
#[derive(Default)]
pub struct Wire(Vec<u8>);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.0.push(kind.id());
        self
    }

    /// Length prefixed modified UTF-8, as names and string payloads are.
    pub fn str(self, s: &str) -> Self {
        let s = cesu8::to_java_cesu8(s);
        self.str_len(s.len()).raw(&s)
    }

    pub fn str_len(mut self, len: usize) -> Self {
        let len: u16 = len.try_into().unwrap();
        self.0.write_u16::<BigEndian>(len).unwrap();
        self
    }

    /// A list or array length, or any other bare i32.
    pub fn len(mut self, len: i32) -> Self {
        self.0.write_i32::<BigEndian>(len).unwrap();
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    /// The kind and name that start every entry of a compound.
    pub fn header(self, kind: Kind, name: &str) -> Self {
        self.kind(kind).str(name)
    }

    /// Start a compound entry. Close it with [`Wire::end`].
    pub fn compound(self, name: &str) -> Self {
        self.header(Kind::Compound, name)
    }

    pub fn end(self) -> Self {
        self.kind(Kind::End)
    }

    /// Start a list entry of `len` elements, which follow as bare payloads.
    pub fn list(self, name: &str, kind: Kind, len: i32) -> Self {
        self.header(Kind::List, name).elements(kind, len)
    }

    /// The element kind and length of a list nested in another list.
    pub fn elements(self, kind: Kind, len: i32) -> Self {
        self.kind(kind).len(len)
    }

    /// A whole entry: header then payload.
    pub fn entry(self, name: &str, value: impl Into<Tag>) -> Self {
        let value = value.into();
        self.header(value.kind(), name).payload(&value)
    }

    pub fn payload(mut self, value: &Tag) -> Self {
        let w = &mut self.0;
        match value {
            Tag::Byte(v) => w.write_i8(*v).unwrap(),
            Tag::Short(v) => w.write_i16::<BigEndian>(*v).unwrap(),
            Tag::Int(v) => w.write_i32::<BigEndian>(*v).unwrap(),
            Tag::Long(v) => w.write_i64::<BigEndian>(*v).unwrap(),
            Tag::Float(v) => w.write_f32::<BigEndian>(*v).unwrap(),
            Tag::Double(v) => w.write_f64::<BigEndian>(*v).unwrap(),
            Tag::String(s) => return self.str(s),
            Tag::ByteArray(arr) => {
                self = self.len(arr.len() as i32);
                for v in arr.iter() {
                    self.0.write_i8(*v).unwrap();
                }
            }
            Tag::IntArray(arr) => {
                self = self.len(arr.len() as i32);
                for v in arr.iter() {
                    self.0.write_i32::<BigEndian>(*v).unwrap();
                }
            }
            Tag::LongArray(arr) => {
                self = self.len(arr.len() as i32);
                for v in arr.iter() {
                    self.0.write_i64::<BigEndian>(*v).unwrap();
                }
            }
            Tag::List(list) => return self.list_payload(list),
            Tag::Compound(c) => return self.compound_payload(c),
        }
        self
    }

    fn list_payload(self, list: &List) -> Self {
        let kind = list.kind().unwrap_or(Kind::End);
        list.iter()
            .fold(self.elements(kind, list.len() as i32), |w, v| w.payload(v))
    }

    fn compound_payload(self, c: &Compound) -> Self {
        c.iter()
            .fold(self, |w, (name, v)| w.header(v.kind(), name).payload(v))
            .end()
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }

    pub fn compressed(self, compression: Compression) -> Vec<u8> {
        compression.compress(&self.0, Level::default()).unwrap()
    }
}
