use std::convert::TryFrom;
use std::fmt::Display;

use crate::error::{Error, Result};

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data, only which of the 13 tag variants it is. The discriminant of each
/// variant is the id used on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Kind {
    /// Represents the end of a Compound object. Never carried by a [`Tag`][crate::Tag].
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other tags, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Kind {
    /// Look up a kind by its wire id. Unknown ids are an error rather than
    /// defaulting to anything.
    pub fn from_id(id: u8) -> Result<Kind> {
        Kind::try_from(id)
    }

    /// The wire id of this kind.
    pub fn id(self) -> u8 {
        u8::from(self)
    }

    /// The canonical name of this kind, eg `TAG_Compound`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::End => "TAG_End",
            Kind::Byte => "TAG_Byte",
            Kind::Short => "TAG_Short",
            Kind::Int => "TAG_Int",
            Kind::Long => "TAG_Long",
            Kind::Float => "TAG_Float",
            Kind::Double => "TAG_Double",
            Kind::ByteArray => "TAG_Byte_Array",
            Kind::String => "TAG_String",
            Kind::List => "TAG_List",
            Kind::Compound => "TAG_Compound",
            Kind::IntArray => "TAG_Int_Array",
            Kind::LongArray => "TAG_Long_Array",
        }
    }

    /// Whether this is one of the three fixed-element array kinds.
    pub fn is_array(self) -> bool {
        matches!(self, Kind::ByteArray | Kind::IntArray | Kind::LongArray)
    }

    /// Whether this is one of the six numeric scalar kinds.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Kind::Byte | Kind::Short | Kind::Int | Kind::Long | Kind::Float | Kind::Double
        )
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        use Kind::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(Error::UnknownKind(value)),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
