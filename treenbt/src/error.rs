//! Contains the Error and Result type used by the tag model and the binary
//! codec, and the [`Category`] taxonomy shared with the other treenbt crates.
use crate::Kind;

/// Broad classification of a failure. Every error type in the treenbt crates
/// can report which of these it falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Bad kind id, bad compression id, truncated or otherwise invalid bytes.
    MalformedWire,
    /// Invalid SNBT or path text.
    Syntax,
    /// A tag of the wrong kind where another was required.
    SchemaMismatch,
    /// An index outside of a list or array.
    Bounds,
    /// A value too large for the format to represent.
    CapacityExceeded,
    /// An internal consistency check failed. Indicates a bug.
    StructuralInvariant,
    /// The underlying reader or writer failed.
    Io,
}

/// Various errors that can occur while building, reading or writing trees.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error from the underlying stream, other than a premature EOF.
    Io(std::io::Error),

    /// The stream ended part way through a value.
    UnexpectedEof,

    /// A kind id outside of 0..=12.
    UnknownKind(u8),

    /// A compression id outside of 1..=3.
    UnknownCompression(u8),

    /// A non-empty list declared its elements to be `TAG_End`.
    UnexpectedEnd,

    /// An array or list declared a negative length.
    NegativeLength(i32),

    /// Expected Modified UTF-8 string data but it was not valid. Contained
    /// bytes are the invalid data.
    Nonunicode(Vec<u8>),

    /// The stream did not start with a named compound.
    NoRootCompound(Kind),

    /// The stream nests deeper than the depth budget given to the reader.
    DepthExceeded(usize),

    /// A string longer than the 65535 bytes its length prefix can hold.
    StringTooLong(usize),

    /// A list or array with more elements than an i32 length can count.
    LengthTooLarge(usize),

    /// No entry with this key in the compound.
    NotFound(String),

    /// Tag present but of a different kind than requested.
    WrongKind { expected: Kind, found: Kind },

    /// An operation that would store or create something the model forbids,
    /// eg a list of `TAG_End`.
    InvalidTag(String),

    /// Adding an element to a list whose elements are of another kind.
    HeterogeneousList { expected: Kind, found: Kind },

    /// Index past the end of a list or array.
    OutOfBounds { index: usize, len: usize },
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Which broad class of failure this is.
    pub fn category(&self) -> Category {
        match self {
            Error::Io(_) => Category::Io,
            Error::UnexpectedEof
            | Error::UnknownKind(_)
            | Error::UnknownCompression(_)
            | Error::UnexpectedEnd
            | Error::NegativeLength(_)
            | Error::Nonunicode(_)
            | Error::NoRootCompound(_)
            | Error::DepthExceeded(_) => Category::MalformedWire,
            Error::StringTooLong(_) | Error::LengthTooLarge(_) => Category::CapacityExceeded,
            Error::NotFound(_)
            | Error::WrongKind { .. }
            | Error::InvalidTag(_)
            | Error::HeterogeneousList { .. } => Category::SchemaMismatch,
            Error::OutOfBounds { .. } => Category::Bounds,
        }
    }

    pub(crate) fn wrong_kind(expected: Kind, found: Kind) -> Error {
        Error::WrongKind { expected, found }
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Error {
        Error::OutOfBounds { index, len }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::UnexpectedEof => f.write_str("eof: unexpectedly ran out of input"),
            Error::UnknownKind(id) => write!(f, "invalid nbt tag value: {}", id),
            Error::UnknownCompression(id) => write!(f, "unrecognised compression scheme: {}", id),
            Error::UnexpectedEnd => f.write_str("invalid nbt: non-empty list of TAG_End"),
            Error::NegativeLength(len) => write!(f, "invalid nbt: negative length {}", len),
            Error::Nonunicode(data) => write!(
                f,
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            Error::NoRootCompound(kind) => {
                write!(f, "invalid nbt: root is {} rather than TAG_Compound", kind)
            }
            Error::DepthExceeded(depth) => {
                write!(f, "invalid nbt: nesting deeper than {} levels", depth)
            }
            Error::StringTooLong(len) => {
                write!(f, "string of {} bytes does not fit a u16 length", len)
            }
            Error::LengthTooLarge(len) => {
                write!(f, "sequence of {} elements does not fit an i32 length", len)
            }
            Error::NotFound(key) => write!(f, "no such element: TAG_Compound[{:?}]", key),
            Error::WrongKind { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            Error::InvalidTag(msg) => f.write_str(msg),
            Error::HeterogeneousList { expected, found } => {
                write!(f, "incompatible kind {} for TAG_List[{}]", found, expected)
            }
            Error::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io(e),
        }
    }
}
