use std::io::{self, BufRead, Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use num_enum::TryFromPrimitive;

use crate::error::{Error, Result};

/// Compression level handed to the gzip and zlib encoders.
pub use flate2::Compression as Level;

/// Various compression schemes that NBT data is typically compressed with.
/// The discriminant is the id used in region files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum Compression {
    Gzip = 1,
    Zlib = 2,
    Uncompressed = 3,
}

impl Compression {
    /// Look up a scheme by id, failing with `UnknownCompression`.
    pub fn from_id(id: u8) -> Result<Compression> {
        Compression::try_from_primitive(id).map_err(|e| Error::UnknownCompression(e.number))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Guess the scheme from the first bytes of a stream: the gzip magic
    /// number, a valid zlib header, or otherwise assume raw NBT.
    pub fn detect(head: &[u8]) -> Compression {
        match head {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [cmf @ 0x78, flg, ..] if (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0 => {
                Compression::Zlib
            }
            _ => Compression::Uncompressed,
        }
    }

    /// Like [`detect`][Compression::detect] but peeks at a buffered reader
    /// without consuming anything.
    pub fn sniff<R: BufRead>(reader: &mut R) -> Result<Compression> {
        let head = reader.fill_buf()?;
        Ok(Compression::detect(head))
    }

    /// Wrap `writer` so that everything written through it is compressed
    /// with this scheme. Call [`Encoder::finish`] to flush the trailer.
    pub fn encoder<W: Write>(self, writer: W, level: Level) -> Encoder<W> {
        match self {
            Compression::Gzip => Encoder::Gzip(GzEncoder::new(writer, level)),
            Compression::Zlib => Encoder::Zlib(ZlibEncoder::new(writer, level)),
            Compression::Uncompressed => Encoder::Uncompressed(writer),
        }
    }

    /// Wrap `reader` so that reads from it are decompressed.
    pub fn decoder<R: Read>(self, reader: R) -> Decoder<R> {
        match self {
            Compression::Gzip => Decoder::Gzip(GzDecoder::new(reader)),
            Compression::Zlib => Decoder::Zlib(ZlibDecoder::new(reader)),
            Compression::Uncompressed => Decoder::Uncompressed(reader),
        }
    }

    /// Compress a whole buffer.
    pub fn compress(self, data: &[u8], level: Level) -> Result<Vec<u8>> {
        let mut enc = self.encoder(Vec::with_capacity(data.len() / 2), level);
        enc.write_all(data)?;
        Ok(enc.finish()?)
    }

    /// Decompress a whole buffer.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len() * 2);
        self.decoder(data).read_to_end(&mut out)?;
        Ok(out)
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Compression::Gzip => "gzip",
            Compression::Zlib => "zlib",
            Compression::Uncompressed => "uncompressed",
        })
    }
}

/// A writer compressing with one of the [`Compression`] schemes.
pub enum Encoder<W: Write> {
    Gzip(GzEncoder<W>),
    Zlib(ZlibEncoder<W>),
    Uncompressed(W),
}

impl<W: Write> Encoder<W> {
    /// Write any remaining compressed data and return the inner writer.
    pub fn finish(self) -> io::Result<W> {
        match self {
            Encoder::Gzip(e) => e.finish(),
            Encoder::Zlib(e) => e.finish(),
            Encoder::Uncompressed(mut w) => {
                w.flush()?;
                Ok(w)
            }
        }
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Encoder::Gzip(e) => e.write(buf),
            Encoder::Zlib(e) => e.write(buf),
            Encoder::Uncompressed(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Encoder::Gzip(e) => e.flush(),
            Encoder::Zlib(e) => e.flush(),
            Encoder::Uncompressed(w) => w.flush(),
        }
    }
}

/// A reader decompressing one of the [`Compression`] schemes.
pub enum Decoder<R: Read> {
    Gzip(GzDecoder<R>),
    Zlib(ZlibDecoder<R>),
    Uncompressed(R),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decoder::Gzip(d) => d.read(buf),
            Decoder::Zlib(d) => d.read(buf),
            Decoder::Uncompressed(r) => r.read(buf),
        }
    }
}
