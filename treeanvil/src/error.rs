use std::fmt::Display;

pub use treenbt::error::Category;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error from the underlying stream.
    Io(std::io::Error),

    /// The region ended part way through its header or a chunk record.
    UnexpectedEof,

    /// A chunk's tree could not be read or written.
    Nbt(treenbt::error::Error),

    /// Chunk coordinates outside of 0..32.
    InvalidOffset(usize, usize),

    /// A chunk record needs more sectors than a location entry can hold.
    ChunkTooLarge { sectors: usize },

    /// A chunk record with a zero length, a length running past its sectors,
    /// an unknown compression id, or a location pointing into the header.
    InvalidChunkMeta,

    /// A header table did not come out at its fixed size while writing.
    /// Indicates a bug.
    HeaderSizeMismatch { expected: u64, found: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::Io(_) => Category::Io,
            Error::UnexpectedEof => Category::MalformedWire,
            Error::Nbt(e) => e.category(),
            Error::InvalidOffset(..) => Category::Bounds,
            Error::ChunkTooLarge { .. } => Category::CapacityExceeded,
            Error::InvalidChunkMeta => Category::MalformedWire,
            Error::HeaderSizeMismatch { .. } => Category::StructuralInvariant,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io(err),
        }
    }
}

impl From<treenbt::error::Error> for Error {
    fn from(err: treenbt::error::Error) -> Error {
        Error::Nbt(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::UnexpectedEof => f.write_str("eof: region file is truncated"),
            Error::Nbt(e) => write!(f, "chunk nbt error: {}", e),
            Error::InvalidOffset(x, z) => write!(f, "invalid offset: x = {}, z = {}", x, z),
            Error::ChunkTooLarge { sectors } => write!(
                f,
                "chunk needs {} sectors, at most {} fit in a region",
                sectors,
                crate::MAX_CHUNK_SECTORS
            ),
            Error::InvalidChunkMeta => f.write_str("chunk metadata was not recognised"),
            Error::HeaderSizeMismatch { expected, found } => write!(
                f,
                "region header ended at byte {}, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Nbt(e) => Some(e),
            _ => None,
        }
    }
}
