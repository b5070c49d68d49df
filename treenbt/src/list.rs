use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, Kind, LongArray, Tag};

/// An NBT list. Every element has the same kind.
///
/// A new list is untyped: it has no component kind until the first element
/// is added, after which only elements of that kind are accepted.
///
/// ```
/// # use treenbt::{Kind, List, Tag};
/// let mut list = List::new();
/// assert_eq!(list.kind(), None);
///
/// list.push(1).unwrap();
/// assert_eq!(list.kind(), Some(Kind::Int));
/// assert!(list.push(2i16).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    kind: Option<Kind>,
    items: Vec<Tag>,
}

impl List {
    /// Create an empty, untyped list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list that will only accept elements of `kind`.
    /// There are no lists of `TAG_End`.
    pub fn with_kind(kind: Kind) -> Result<Self> {
        if kind == Kind::End {
            return Err(Error::InvalidTag("cannot create TAG_List of TAG_End".into()));
        }
        Ok(Self {
            kind: Some(kind),
            items: Vec::new(),
        })
    }

    /// Create a list from existing elements, checking they are all the same
    /// kind.
    pub fn from_tags(items: Vec<Tag>) -> Result<Self> {
        let mut list = Self::new();
        for item in &items {
            list.check(item.kind())?;
        }
        list.items = items;
        Ok(list)
    }

    /// Used by the decoder, which has already read every element as `kind`.
    pub(crate) fn from_parts(kind: Kind, items: Vec<Tag>) -> Self {
        Self {
            kind: Some(kind),
            items,
        }
    }

    /// The component kind, or `None` if the list is still untyped.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Result<&Tag> {
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, self.items.len()))
    }

    /// Get the element at `index`, requiring it to be of `kind`.
    pub fn get_as(&self, index: usize, kind: Kind) -> Result<&Tag> {
        let tag = self.get(index)?;
        if tag.kind() != kind {
            return Err(Error::wrong_kind(kind, tag.kind()));
        }
        Ok(tag)
    }

    typed_getters! {
        usize;
        get_byte: Byte -> i8 = |v| *v;
        get_short: Short -> i16 = |v| *v;
        get_int: Int -> i32 = |v| *v;
        get_long: Long -> i64 = |v| *v;
        get_float: Float -> f32 = |v| *v;
        get_double: Double -> f64 = |v| *v;
        get_byte_array: ByteArray -> &ByteArray = |v| v;
        get_int_array: IntArray -> &IntArray = |v| v;
        get_long_array: LongArray -> &LongArray = |v| v;
        get_string: String -> &str = |v| v.as_str();
        get_list: List -> &List = |v| v;
        get_compound: Compound -> &Compound = |v| v;
    }

    /// Mutable access to a compound element. Handing out the compound rather
    /// than the tag keeps the element kind fixed.
    pub fn get_compound_mut(&mut self, index: usize) -> Result<&mut Compound> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(Tag::Compound(c)) => Ok(c),
            Some(other) => Err(Error::wrong_kind(Kind::Compound, other.kind())),
            None => Err(Error::out_of_bounds(index, len)),
        }
    }

    /// Mutable access to a list element.
    pub fn get_list_mut(&mut self, index: usize) -> Result<&mut List> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(Tag::List(l)) => Ok(l),
            Some(other) => Err(Error::wrong_kind(Kind::List, other.kind())),
            None => Err(Error::out_of_bounds(index, len)),
        }
    }

    /// Append an element. Fails with `HeterogeneousList` if the list already
    /// holds another kind.
    pub fn push(&mut self, value: impl Into<Tag>) -> Result<()> {
        let value = value.into();
        self.check(value.kind())?;
        self.items.push(value);
        Ok(())
    }

    /// Insert at `index`, shifting later elements. `index` may equal the
    /// length to append.
    pub fn insert(&mut self, index: usize, value: impl Into<Tag>) -> Result<()> {
        let value = value.into();
        if index > self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        self.check(value.kind())?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old element.
    pub fn set(&mut self, index: usize, value: impl Into<Tag>) -> Result<Tag> {
        let value = value.into();
        if index >= self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        self.check(value.kind())?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    pub fn remove(&mut self, index: usize) -> Result<Tag> {
        if index >= self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Remove every element. The component kind is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn check(&mut self, kind: Kind) -> Result<()> {
        match self.kind {
            None => {
                self.kind = Some(kind);
                Ok(())
            }
            Some(expected) if expected == kind => Ok(()),
            Some(expected) => Err(Error::HeterogeneousList {
                expected,
                found: kind,
            }),
        }
    }
}

// Lists are equal when their elements are. An empty list that has been given
// a kind is equal to an empty untyped one.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl TryFrom<Vec<Tag>> for List {
    type Error = Error;

    fn try_from(items: Vec<Tag>) -> Result<Self> {
        List::from_tags(items)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
