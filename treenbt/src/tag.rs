use crate::{ByteArray, Compound, IntArray, Kind, List, LongArray};

/// Tag is a complete NBT value. It owns its data. Compounds and Lists are
/// recursive. There is no variant for `TAG_End`: the terminator only
/// exists on the wire, so a tree can never contain one.
///
/// ```
/// # use treenbt::{Compound, Kind, Tag};
/// let mut compound = Compound::new();
/// compound.put("DataVersion", 3465);
///
/// match compound.get("DataVersion") {
///     Ok(Tag::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// assert_eq!(compound.get("DataVersion").unwrap().kind(), Kind::Int);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Tag {
    /// The kind of this tag. Never [`Kind::End`].
    pub fn kind(&self) -> Kind {
        match self {
            Tag::Byte(_) => Kind::Byte,
            Tag::Short(_) => Kind::Short,
            Tag::Int(_) => Kind::Int,
            Tag::Long(_) => Kind::Long,
            Tag::Float(_) => Kind::Float,
            Tag::Double(_) => Kind::Double,
            Tag::ByteArray(_) => Kind::ByteArray,
            Tag::String(_) => Kind::String,
            Tag::List(_) => Kind::List,
            Tag::Compound(_) => Kind::Compound,
            Tag::IntArray(_) => Kind::IntArray,
            Tag::LongArray(_) => Kind::LongArray,
        }
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    /// Number of elements if this is a list or one of the arrays.
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Tag::List(v) => Some(v.len()),
            Tag::ByteArray(v) => Some(v.len()),
            Tag::IntArray(v) => Some(v.len()),
            Tag::LongArray(v) => Some(v.len()),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Tag {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<&bool> for Tag {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Tag,
    T: arbitrary::Arbitrary<'a>,
{
    let items = u
        .arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect();

    List::from_tags(items).map_err(|_| arbitrary::Error::IncorrectFormat)
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    Ok(match u.arbitrary::<Kind>()? {
        Kind::End => List::new(),
        Kind::Byte => het_list(u, Tag::Byte)?,
        Kind::Short => het_list(u, Tag::Short)?,
        Kind::Int => het_list(u, Tag::Int)?,
        Kind::Long => het_list(u, Tag::Long)?,
        Kind::Float => het_list(u, Tag::Float)?,
        Kind::Double => het_list(u, Tag::Double)?,
        Kind::ByteArray => het_list(u, |v: Vec<i8>| Tag::ByteArray(ByteArray::new(v)))?,
        Kind::String => het_list(u, Tag::String)?,
        Kind::List => {
            // make a list of lists
            let len = u.arbitrary_len::<Tag>()?;
            let mut items = vec![];
            for _ in 0..len {
                items.push(Tag::List(arb_list(u)?));
            }
            List::from_tags(items).map_err(|_| arbitrary::Error::IncorrectFormat)?
        }
        Kind::Compound => het_list(u, Tag::Compound)?,
        Kind::IntArray => het_list(u, |v: Vec<i32>| Tag::IntArray(IntArray::new(v)))?,
        Kind::LongArray => het_list(u, |v: Vec<i64>| Tag::LongArray(LongArray::new(v)))?,
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut compound = Compound::new();
        for entry in u.arbitrary_iter::<(String, Tag)>()? {
            let (key, value) = entry?;
            compound.put(key, value);
        }
        Ok(compound)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<Kind>()? {
            Kind::End => return Err(arbitrary::Error::IncorrectFormat),
            Kind::Byte => Tag::Byte(u.arbitrary()?),
            Kind::Short => Tag::Short(u.arbitrary()?),
            Kind::Int => Tag::Int(u.arbitrary()?),
            Kind::Long => Tag::Long(u.arbitrary()?),
            Kind::Float => Tag::Float(u.arbitrary()?),
            Kind::Double => Tag::Double(u.arbitrary()?),
            Kind::ByteArray => Tag::ByteArray(ByteArray::new(u.arbitrary()?)),
            Kind::String => Tag::String(u.arbitrary()?),
            Kind::Compound => Tag::Compound(u.arbitrary()?),
            Kind::IntArray => Tag::IntArray(IntArray::new(u.arbitrary()?)),
            Kind::LongArray => Tag::LongArray(LongArray::new(u.arbitrary()?)),

            // Lists need to all be the same kind.
            Kind::List => Tag::List(arb_list(u)?),
        })
    }
}
