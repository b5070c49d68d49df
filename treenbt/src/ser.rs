//! Writing trees as binary NBT.
//!
//! The output is a single named compound: `[10][name][body]`. Compression
//! is applied around the whole stream.
//!
//! ```
//! # use treenbt::{Compound, Compression};
//! # fn main() -> treenbt::error::Result<()> {
//! let mut level = Compound::new();
//! level.put("SpawnX", 12);
//!
//! let mut file = Vec::new();
//! treenbt::to_writer(&mut file, "Data", &level, Compression::Uncompressed)?;
//!
//! // Compound id, then the name, then the SpawnX entry and the terminator.
//! assert_eq!(&file[..7], &[10, 0, 4, b'D', b'a', b't', b'a']);
//! assert_eq!(file.last(), Some(&0));
//! # Ok(())
//! # }
//! ```
use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, Compression, Kind, Level, List, Tag, DEFAULT_MAX_DEPTH};

pub(crate) trait WriteNbt: Write {
    fn write_kind(&mut self, kind: Kind) -> Result<()> {
        self.write_u8(kind.id())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let bytes = cesu8::to_java_cesu8(s);
        let len: u16 = bytes
            .len()
            .try_into()
            .map_err(|_| Error::StringTooLong(bytes.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&bytes)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len.try_into().map_err(|_| Error::LengthTooLarge(len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Serialize `root` under `name` into `writer` using the default depth.
pub fn to_writer<W: Write>(
    writer: W,
    name: &str,
    root: &Compound,
    compression: Compression,
) -> Result<()> {
    to_writer_with_depth(writer, name, root, compression, DEFAULT_MAX_DEPTH)
}

/// Serialize `root` under `name` into `writer`. Compounds and lists nested
/// deeper than `max_depth` are written empty. The budget starts at the root
/// body, whose entries are at depth 1.
pub fn to_writer_with_depth<W: Write>(
    writer: W,
    name: &str,
    root: &Compound,
    compression: Compression,
    max_depth: usize,
) -> Result<()> {
    let mut enc = compression.encoder(writer, Level::default());
    enc.write_kind(Kind::Compound)?;
    enc.write_size_prefixed_str(name)?;
    write_compound(&mut enc, root, max_depth)?;
    enc.finish()?;
    Ok(())
}

/// Serialize `root` under `name` to a new buffer using the default depth.
pub fn to_bytes(name: &str, root: &Compound, compression: Compression) -> Result<Vec<u8>> {
    to_bytes_with_depth(name, root, compression, DEFAULT_MAX_DEPTH)
}

pub fn to_bytes_with_depth(
    name: &str,
    root: &Compound,
    compression: Compression,
    max_depth: usize,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer_with_depth(&mut buf, name, root, compression, max_depth)?;
    Ok(buf)
}

// `depth` is the budget left for this compound's children. At zero the body
// is just the terminator.
fn write_compound<W: Write>(w: &mut W, compound: &Compound, depth: usize) -> Result<()> {
    if depth > 0 {
        for (name, tag) in compound {
            w.write_kind(tag.kind())?;
            w.write_size_prefixed_str(name)?;
            write_payload(w, tag, depth - 1)?;
        }
    }
    w.write_kind(Kind::End)?;
    Ok(())
}

fn write_list<W: Write>(w: &mut W, list: &List, depth: usize) -> Result<()> {
    match list.kind() {
        // An untyped list has to be empty.
        None => {
            w.write_kind(Kind::End)?;
            w.write_len(0)?;
        }
        Some(kind) => {
            w.write_kind(kind)?;
            if depth == 0 {
                w.write_len(0)?;
                return Ok(());
            }
            w.write_len(list.len())?;
            for tag in list {
                write_payload(w, tag, depth - 1)?;
            }
        }
    }
    Ok(())
}

fn write_payload<W: Write>(w: &mut W, tag: &Tag, depth: usize) -> Result<()> {
    match tag {
        Tag::Byte(v) => w.write_i8(*v)?,
        Tag::Short(v) => w.write_i16::<BigEndian>(*v)?,
        Tag::Int(v) => w.write_i32::<BigEndian>(*v)?,
        Tag::Long(v) => w.write_i64::<BigEndian>(*v)?,
        Tag::Float(v) => w.write_f32::<BigEndian>(*v)?,
        Tag::Double(v) => w.write_f64::<BigEndian>(*v)?,
        Tag::ByteArray(arr) => {
            w.write_len(arr.len())?;
            for v in arr.iter() {
                w.write_i8(*v)?;
            }
        }
        Tag::IntArray(arr) => {
            w.write_len(arr.len())?;
            for v in arr.iter() {
                w.write_i32::<BigEndian>(*v)?;
            }
        }
        Tag::LongArray(arr) => {
            w.write_len(arr.len())?;
            for v in arr.iter() {
                w.write_i64::<BigEndian>(*v)?;
            }
        }
        Tag::String(s) => w.write_size_prefixed_str(s)?,
        Tag::List(list) => write_list(w, list, depth)?,
        Tag::Compound(c) => write_compound(w, c, depth)?,
    }
    Ok(())
}
