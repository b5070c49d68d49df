use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};
use log::{debug, trace};
use once_cell::sync::OnceCell;
use treenbt::{Compound, Compression, DEFAULT_MAX_DEPTH};

use crate::{Error, Result};

/// the size in bytes of a 'sector' in a region file. Sectors are Minecraft's size unit
/// for chunks. For example, a chunk might be `3 * SECTOR_SIZE` bytes. The
/// actual compressed bytes of a chunk may be smaller and the exact value is
/// tracked in the chunk header.
pub const SECTOR_SIZE: usize = 4096;

/// the size of the region file header: the location table followed by the
/// timestamp table, one sector each.
pub const REGION_HEADER_SIZE: usize = 2 * SECTOR_SIZE;

/// size of header for each chunk in the region file. This header precedes the
/// compressed chunk data: a u32 length then the compression id.
pub(crate) const CHUNK_HEADER_SIZE: usize = 5;

/// The sector count of a location entry is a single byte.
pub const MAX_CHUNK_SECTORS: usize = 255;

/// Chunks along each side of a region.
pub const REGION_SIZE: usize = 32;

const CHUNK_COUNT: usize = REGION_SIZE * REGION_SIZE;

/// One chunk's tree, plus the compression it is stored with if that differs
/// from its region's.
///
/// A chunk keeps the record it was last read or written as. It is dirty
/// while it has none; any mutable access drops the record, so the next
/// write encodes the tree again. Clean chunks are written back byte for
/// byte.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    data: Compound,
    compression: Option<Compression>,
    record: OnceCell<Record>,
}

#[derive(Debug, Clone)]
struct Record {
    compression: Compression,
    max_depth: usize,
    bytes: Vec<u8>,
}

impl Chunk {
    pub fn new(data: Compound) -> Self {
        Self {
            data,
            compression: None,
            record: OnceCell::new(),
        }
    }

    pub fn data(&self) -> &Compound {
        &self.data
    }

    /// Mutable access to the tree. Marks the chunk dirty.
    pub fn data_mut(&mut self) -> &mut Compound {
        self.record.take();
        &mut self.data
    }

    pub fn into_data(self) -> Compound {
        self.data
    }

    pub fn set_data(&mut self, data: Compound) {
        self.record.take();
        self.data = data;
    }

    /// The compression this chunk overrides its region's with. Chunks read
    /// from a file always have one, set to the scheme they were stored with.
    pub fn compression(&self) -> Option<Compression> {
        self.compression
    }

    pub fn set_compression(&mut self, compression: Option<Compression>) {
        self.compression = compression;
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    /// Whether the tree has changed since the chunk was last read or
    /// written.
    pub fn is_dirty(&self) -> bool {
        self.record.get().is_none()
    }

    // [len:u32][compression:u8][tree], where len counts the compression byte.
    // Reuses the kept record if it was made the same way.
    fn record(&self, compression: Compression, max_depth: usize) -> Result<Cow<'_, [u8]>> {
        if let Some(record) = self.record.get() {
            if record.compression == compression && record.max_depth == max_depth {
                return Ok(Cow::Borrowed(&record.bytes));
            }
        }

        let mut bytes = vec![0; CHUNK_HEADER_SIZE];
        bytes[4] = compression.id();
        treenbt::ser::to_writer_with_depth(&mut bytes, "", &self.data, compression, max_depth)?;

        let len = u32::try_from(bytes.len() - 4).map_err(|_| Error::ChunkTooLarge {
            sectors: sectors_for(bytes.len()),
        })?;
        BigEndian::write_u32(&mut bytes[..4], len);

        if self.record.get().is_some() {
            return Ok(Cow::Owned(bytes));
        }
        let record = self.record.get_or_init(|| Record {
            compression,
            max_depth,
            bytes,
        });
        Ok(Cow::Borrowed(&record.bytes))
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.compression == other.compression
    }
}

impl From<Compound> for Chunk {
    fn from(data: Compound) -> Self {
        Self::new(data)
    }
}

/// A Minecraft Region: a 32×32 grid of optional chunks and their last
/// modification timestamps.
///
/// Cells are addressed by chunk coordinates `x` and `z`, both in `0..32`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    compression: Compression,
    chunks: Vec<Option<Chunk>>,
    timestamps: Vec<i32>,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Region {
    /// An empty region whose chunks are written zlib compressed.
    pub fn new() -> Self {
        Self {
            compression: Compression::Zlib,
            chunks: std::iter::repeat_with(|| None).take(CHUNK_COUNT).collect(),
            timestamps: vec![0; CHUNK_COUNT],
        }
    }

    /// The compression used for chunks without their own.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn set_compression(&mut self, compression: Compression) {
        self.compression = compression;
    }

    pub fn chunk(&self, x: usize, z: usize) -> Result<Option<&Chunk>> {
        Ok(self.chunks[index(x, z)?].as_ref())
    }

    pub fn chunk_mut(&mut self, x: usize, z: usize) -> Result<Option<&mut Chunk>> {
        Ok(self.chunks[index(x, z)?].as_mut())
    }

    /// Store a chunk, returning the one it replaces.
    pub fn set_chunk(&mut self, x: usize, z: usize, chunk: Chunk) -> Result<Option<Chunk>> {
        Ok(self.chunks[index(x, z)?].replace(chunk))
    }

    /// Remove a chunk, returning it. Removing a chunk that does not exist is
    /// fine.
    pub fn remove_chunk(&mut self, x: usize, z: usize) -> Result<Option<Chunk>> {
        Ok(self.chunks[index(x, z)?].take())
    }

    pub fn timestamp(&self, x: usize, z: usize) -> Result<i32> {
        Ok(self.timestamps[index(x, z)?])
    }

    pub fn set_timestamp(&mut self, x: usize, z: usize, timestamp: i32) -> Result<()> {
        self.timestamps[index(x, z)?] = timestamp;
        Ok(())
    }

    /// Present chunks with their coordinates, `x` major.
    pub fn chunks(&self) -> impl Iterator<Item = (usize, usize, &Chunk)> + '_ {
        self.chunks.iter().enumerate().filter_map(|(i, chunk)| {
            chunk
                .as_ref()
                .map(|c| (i / REGION_SIZE, i % REGION_SIZE, c))
        })
    }

    /// Number of present chunks.
    pub fn len(&self) -> usize {
        self.chunks.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(Option::is_none)
    }

    /// Write the whole region to `writer`, which is assumed to start at
    /// position zero. Chunks are packed into consecutive sectors straight
    /// after the header.
    ///
    /// Nothing is truncated, so any bytes the stream already held past the
    /// last sector remain.
    pub fn to_writer<W: Write + Seek>(&self, writer: W) -> Result<()> {
        self.to_writer_with_depth(writer, DEFAULT_MAX_DEPTH)
    }

    /// As [`to_writer`][Region::to_writer], with chunk trees nested deeper
    /// than `max_depth` written truncated.
    pub fn to_writer_with_depth<W: Write + Seek>(
        &self,
        mut writer: W,
        max_depth: usize,
    ) -> Result<()> {
        let mut locations: Vec<u8> = Vec::with_capacity(SECTOR_SIZE);
        let mut timestamps: Vec<u8> = Vec::with_capacity(SECTOR_SIZE);

        // Sector 0 and 1 are the header.
        let mut offset: u32 = 2;

        for (i, chunk) in self.chunks.iter().enumerate() {
            let chunk = match chunk {
                Some(chunk) => chunk,
                None => {
                    locations.write_u32::<BigEndian>(0)?;
                    timestamps.write_i32::<BigEndian>(0)?;
                    continue;
                }
            };

            let compression = chunk.compression.unwrap_or(self.compression);
            let record = chunk.record(compression, max_depth)?;
            let sectors = sector_count(record.len())?;

            trace!(
                "chunk {},{}: {} bytes in {} sectors at sector {}",
                i / REGION_SIZE,
                i % REGION_SIZE,
                record.len(),
                sectors,
                offset
            );

            writer.seek(SeekFrom::Start(offset as u64 * SECTOR_SIZE as u64))?;
            writer.write_all(&record)?;
            let padding = sectors as usize * SECTOR_SIZE - record.len();
            writer.write_all(&vec![0; padding])?;

            locations.write_u32::<BigEndian>((offset << 8) | u32::from(sectors))?;
            timestamps.write_i32::<BigEndian>(self.timestamps[i])?;
            offset += u32::from(sectors);
        }

        writer.seek(SeekFrom::Start(0))?;
        writer.write_all(&locations)?;
        check_position(&mut writer, SECTOR_SIZE)?;
        writer.write_all(&timestamps)?;
        check_position(&mut writer, REGION_HEADER_SIZE)?;
        writer.flush()?;

        debug!("wrote region of {} chunks in {} sectors", self.len(), offset);
        Ok(())
    }

    /// Read a whole region from `reader`, which is assumed to start at
    /// position zero.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_reader_with_depth(reader, DEFAULT_MAX_DEPTH)
    }

    /// As [`from_reader`][Region::from_reader], rejecting chunk trees nested
    /// deeper than `max_depth`.
    pub fn from_reader_with_depth<R: Read + Seek>(
        mut reader: R,
        max_depth: usize,
    ) -> Result<Self> {
        let mut header = vec![0; REGION_HEADER_SIZE];
        reader.seek(SeekFrom::Start(0))?;
        reader.read_exact(&mut header)?;

        let mut region = Self::new();
        let (mut locations, mut timestamps) = header.split_at(SECTOR_SIZE);

        for i in 0..CHUNK_COUNT {
            let location = locations.read_u32::<BigEndian>()?;
            region.timestamps[i] = timestamps.read_i32::<BigEndian>()?;

            // never generated
            if location == 0 {
                continue;
            }

            let offset = u64::from(location >> 8);
            if offset < 2 {
                return Err(Error::InvalidChunkMeta);
            }
            reader.seek(SeekFrom::Start(offset * SECTOR_SIZE as u64))?;

            let sectors = (location & 0xFF) as usize;
            let len = reader.read_u32::<BigEndian>()?;
            if len == 0 || len as usize + 4 > sectors * SECTOR_SIZE {
                return Err(Error::InvalidChunkMeta);
            }
            let compression =
                Compression::from_id(reader.read_u8()?).map_err(|_| Error::InvalidChunkMeta)?;

            trace!(
                "chunk {},{}: {} bytes {} at sector {}",
                i / REGION_SIZE,
                i % REGION_SIZE,
                len,
                compression,
                offset
            );

            let mut bytes: Vec<u8> = Vec::with_capacity(CHUNK_HEADER_SIZE);
            bytes.write_u32::<BigEndian>(len)?;
            bytes.write_u8(compression.id())?;
            (&mut reader)
                .take(u64::from(len - 1))
                .read_to_end(&mut bytes)?;
            if bytes.len() != len as usize + 4 {
                return Err(Error::UnexpectedEof);
            }

            let payload = &bytes[CHUNK_HEADER_SIZE..];
            let (_, data) = treenbt::de::read_root(payload, compression, max_depth)?;

            region.chunks[i] = Some(Chunk {
                data,
                compression: Some(compression),
                record: OnceCell::with_value(Record {
                    compression,
                    max_depth,
                    bytes,
                }),
            });
        }

        debug!("read region of {} chunks", region.len());
        Ok(region)
    }

    /// Write the region to a file, replacing any existing one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.to_writer(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

/// Number of sectors a chunk record of `len` bytes, header included,
/// occupies. Fails with `ChunkTooLarge` past [`MAX_CHUNK_SECTORS`].
pub fn sector_count(len: usize) -> Result<u8> {
    let sectors = sectors_for(len);
    u8::try_from(sectors).map_err(|_| Error::ChunkTooLarge { sectors })
}

fn sectors_for(len: usize) -> usize {
    (len + SECTOR_SIZE - 1) / SECTOR_SIZE
}

fn index(x: usize, z: usize) -> Result<usize> {
    if x >= REGION_SIZE || z >= REGION_SIZE {
        return Err(Error::InvalidOffset(x, z));
    }
    Ok(x * REGION_SIZE + z)
}

fn check_position<S: Seek>(stream: &mut S, expected: usize) -> Result<()> {
    let found = stream.stream_position()?;
    if found != expected as u64 {
        return Err(Error::HeaderSizeMismatch {
            expected: expected as u64,
            found,
        });
    }
    Ok(())
}
