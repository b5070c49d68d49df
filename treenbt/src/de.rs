//! Reading binary NBT into trees.
//!
//! A stream holds one named compound. The readers here return a *wrapper*
//! compound with that root stored under its name, so the caller's data is
//! at `wrapper.get_compound(name)`. Most files use the empty name. Use
//! [`read_root`] to get the name and the root separately.
//!
//! ```
//! # use treenbt::{Compound, Compression};
//! # fn main() -> treenbt::error::Result<()> {
//! let mut level = Compound::new();
//! level.put("SpawnX", 12);
//! let bytes = treenbt::to_bytes("Data", &level, Compression::Zlib)?;
//!
//! let wrapper = treenbt::from_bytes(&bytes)?;
//! assert_eq!(wrapper.get_compound("Data")?.get_int("SpawnX")?, 12);
//!
//! let (name, root) = treenbt::de::read_root(&bytes[..], Compression::Zlib, 512)?;
//! assert_eq!(name, "Data");
//! assert_eq!(root, level);
//! # Ok(())
//! # }
//! ```
use std::io::{BufReader, Read};

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::{
    ByteArray, Compound, Compression, IntArray, Kind, List, LongArray, Tag, DEFAULT_MAX_DEPTH,
};

// Upper bound on what is reserved up front for a declared length. Longer
// sequences still read fine, they just grow as the data actually arrives.
const MAX_PREALLOC: usize = 4096;

/// Read a tree from `reader`, detecting the compression from its first
/// bytes.
pub fn from_reader<R: Read>(reader: R) -> Result<Compound> {
    let mut reader = BufReader::new(reader);
    let compression = Compression::sniff(&mut reader)?;
    debug!("detected {} nbt stream", compression);
    from_reader_with(reader, compression)
}

/// Read a tree from a buffer, detecting the compression from its first
/// bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<Compound> {
    let compression = Compression::detect(bytes);
    debug!("detected {} nbt buffer of {} bytes", compression, bytes.len());
    from_reader_with(bytes, compression)
}

/// Read a tree from `reader` compressed with a known scheme.
pub fn from_reader_with<R: Read>(reader: R, compression: Compression) -> Result<Compound> {
    from_reader_with_depth(reader, compression, DEFAULT_MAX_DEPTH)
}

/// Read a tree from `reader`, rejecting streams nested deeper than
/// `max_depth` with `DepthExceeded`.
pub fn from_reader_with_depth<R: Read>(
    reader: R,
    compression: Compression,
    max_depth: usize,
) -> Result<Compound> {
    let (name, root) = read_root(reader, compression, max_depth)?;
    let mut wrapper = Compound::new();
    wrapper.put(name, root);
    Ok(wrapper)
}

/// Read the root named compound, returning its name and body.
pub fn read_root<R: Read>(
    reader: R,
    compression: Compression,
    max_depth: usize,
) -> Result<(String, Compound)> {
    let mut de = Deserializer {
        reader: compression.decoder(reader),
        max_depth,
    };

    let kind = de.read_kind()?;
    if kind != Kind::Compound {
        return Err(Error::NoRootCompound(kind));
    }
    let name = de.read_string()?;
    let root = de.read_compound(max_depth)?;
    Ok((name, root))
}

struct Deserializer<R> {
    reader: R,
    max_depth: usize,
}

impl<R: Read> Deserializer<R> {
    fn read_kind(&mut self) -> Result<Kind> {
        Kind::from_id(self.reader.read_u8()?)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;
        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf)?;

        if let Ok(s) = cesu8::from_java_cesu8(&buf) {
            return Ok(s.into_owned());
        }
        Err(Error::Nonunicode(buf))
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.reader.read_i32::<BigEndian>()?;
        if len < 0 {
            return Err(Error::NegativeLength(len));
        }
        Ok(len as usize)
    }

    /// Read exactly `len` elements of `width` bytes without trusting `len`
    /// for the allocation.
    fn read_elements(&mut self, len: usize, width: usize) -> Result<Vec<u8>> {
        let total = len
            .checked_mul(width)
            .ok_or(Error::LengthTooLarge(len))?;
        let mut buf = Vec::with_capacity(total.min(MAX_PREALLOC));
        (&mut self.reader).take(total as u64).read_to_end(&mut buf)?;
        if buf.len() != total {
            return Err(Error::UnexpectedEof);
        }
        Ok(buf)
    }

    // `depth` is the budget left for this compound's children, matching the
    // writer: an empty compound is fine at any depth.
    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let kind = self.read_kind()?;
            if kind == Kind::End {
                break;
            }
            if depth == 0 {
                return Err(Error::DepthExceeded(self.max_depth));
            }
            let name = self.read_string()?;
            let tag = self.read_payload(kind, depth - 1)?;
            compound.put(name, tag);
        }
        Ok(compound)
    }

    fn read_list(&mut self, depth: usize) -> Result<List> {
        let kind = self.read_kind()?;
        let count = self.reader.read_i32::<BigEndian>()?;

        // Older writers produced empty lists with any element kind, and even
        // negative counts. They are all just empty.
        if count <= 0 {
            return Ok(match kind {
                Kind::End => List::new(),
                kind => List::with_kind(kind)?,
            });
        }
        if kind == Kind::End {
            return Err(Error::UnexpectedEnd);
        }
        if depth == 0 {
            return Err(Error::DepthExceeded(self.max_depth));
        }

        let count = count as usize;
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            items.push(self.read_payload(kind, depth - 1)?);
        }
        Ok(List::from_parts(kind, items))
    }

    fn read_payload(&mut self, kind: Kind, depth: usize) -> Result<Tag> {
        Ok(match kind {
            Kind::End => return Err(Error::UnexpectedEnd),
            Kind::Byte => Tag::Byte(self.reader.read_i8()?),
            Kind::Short => Tag::Short(self.reader.read_i16::<BigEndian>()?),
            Kind::Int => Tag::Int(self.reader.read_i32::<BigEndian>()?),
            Kind::Long => Tag::Long(self.reader.read_i64::<BigEndian>()?),
            Kind::Float => Tag::Float(self.reader.read_f32::<BigEndian>()?),
            Kind::Double => Tag::Double(self.reader.read_f64::<BigEndian>()?),
            Kind::ByteArray => {
                let len = self.read_len()?;
                let bytes = self.read_elements(len, 1)?;
                Tag::ByteArray(bytes.into_iter().map(|b| b as i8).collect::<ByteArray>())
            }
            Kind::IntArray => {
                let len = self.read_len()?;
                let bytes = self.read_elements(len, 4)?;
                Tag::IntArray(
                    bytes
                        .chunks_exact(4)
                        .map(|mut c| c.read_i32::<BigEndian>())
                        .collect::<std::io::Result<IntArray>>()?,
                )
            }
            Kind::LongArray => {
                let len = self.read_len()?;
                let bytes = self.read_elements(len, 8)?;
                Tag::LongArray(
                    bytes
                        .chunks_exact(8)
                        .map(|mut c| c.read_i64::<BigEndian>())
                        .collect::<std::io::Result<LongArray>>()?,
                )
            }
            Kind::String => Tag::String(self.read_string()?),
            Kind::List => Tag::List(self.read_list(depth)?),
            Kind::Compound => Tag::Compound(self.read_compound(depth)?),
        })
    }
}
