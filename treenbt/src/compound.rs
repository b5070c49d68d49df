use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, Kind, List, LongArray, Tag};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::HashMap<String, Tag>;
#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<String, Tag>;

#[cfg(not(feature = "preserve-order"))]
pub type Iter<'a> = std::collections::hash_map::Iter<'a, String, Tag>;
#[cfg(feature = "preserve-order")]
pub type Iter<'a> = indexmap::map::Iter<'a, String, Tag>;

/// An NBT compound: a map from unique string keys to tags.
///
/// Iteration order is unspecified unless the `preserve-order` feature is
/// enabled, in which case entries keep their insertion order.
///
/// ```
/// # use treenbt::{Compound, Kind};
/// let mut level = Compound::new();
/// level.put("LevelName", "world");
/// level.put("SpawnX", 12);
///
/// assert_eq!(level.get_string("LevelName").unwrap(), "world");
/// assert!(level.get_int("LevelName").is_err());
/// assert_eq!(level.get("SpawnX").unwrap().kind(), Kind::Int);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    map: Map,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tag stored under `key`, failing with `NotFound`.
    pub fn get(&self, key: &str) -> Result<&Tag> {
        self.map
            .get(key)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Tag> {
        self.map
            .get_mut(key)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    /// Get the tag stored under `key`, requiring it to be of `kind`.
    pub fn get_as(&self, key: &str, kind: Kind) -> Result<&Tag> {
        let tag = self.get(key)?;
        if tag.kind() != kind {
            return Err(Error::wrong_kind(kind, tag.kind()));
        }
        Ok(tag)
    }

    typed_getters! {
        &str;
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

    pub fn get_compound_mut(&mut self, key: &str) -> Result<&mut Compound> {
        match self.get_mut(key)? {
            Tag::Compound(c) => Ok(c),
            other => Err(Error::wrong_kind(Kind::Compound, other.kind())),
        }
    }

    pub fn get_list_mut(&mut self, key: &str) -> Result<&mut List> {
        match self.get_mut(key)? {
            Tag::List(l) => Ok(l),
            other => Err(Error::wrong_kind(Kind::List, other.kind())),
        }
    }

    /// Store `value` under `key`, returning whatever was there before.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Tag> {
        self.map.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        #[cfg(feature = "preserve-order")]
        return self.map.shift_remove(key);
        #[cfg(not(feature = "preserve-order"))]
        return self.map.remove(key);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Tag> {
        self.map.values()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.map.iter()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Structural subset test: true if every entry of `pattern` is present
    /// here with an equal value. Only the top level is a subset match; values,
    /// nested compounds included, must be deeply equal.
    ///
    /// ```
    /// # use treenbt::{tag, Compound};
    /// let mut item = Compound::new();
    /// item.put("id", "minecraft:stone");
    /// item.put("Count", 3u8);
    /// item.put("tag", tag!({"Damage": 0}));
    ///
    /// let mut pattern = Compound::new();
    /// pattern.put("tag", tag!({"Damage": 0}));
    ///
    /// assert!(item.contains(&pattern));
    /// assert!(!pattern.contains(&item));
    ///
    /// pattern.put("tag", tag!({}));
    /// assert!(!item.contains(&pattern));
    /// ```
    pub fn contains(&self, pattern: &Compound) -> bool {
        pattern
            .iter()
            .all(|(key, want)| self.map.get(key) == Some(want))
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Tag)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
