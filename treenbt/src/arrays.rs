use std::ops::Deref;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::Tag;

// The three array kinds only differ in element type, so they are generated
// from one template. Elements are stored unboxed; `element` projects one
// back into a `Tag` of the matching scalar kind.
macro_rules! array_type {
    ($(#[$attr:meta])* $name:ident, $elem:ty, $scalar:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Get the element at `index`, failing with `OutOfBounds` if
            /// there is none.
            pub fn get(&self, index: usize) -> Result<$elem> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or_else(|| Error::out_of_bounds(index, self.data.len()))
            }

            /// Replace the element at `index`, returning the old value.
            pub fn set(&mut self, index: usize, value: $elem) -> Result<$elem> {
                let len = self.data.len();
                let slot = self
                    .data
                    .get_mut(index)
                    .ok_or_else(|| Error::out_of_bounds(index, len))?;
                Ok(std::mem::replace(slot, value))
            }

            pub fn push(&mut self, value: $elem) {
                self.data.push(value);
            }

            /// Insert at `index`, shifting later elements. `index` may equal
            /// the length to append.
            pub fn insert(&mut self, index: usize, value: $elem) -> Result<()> {
                if index > self.data.len() {
                    return Err(Error::out_of_bounds(index, self.data.len()));
                }
                self.data.insert(index, value);
                Ok(())
            }

            pub fn remove(&mut self, index: usize) -> Result<$elem> {
                if index >= self.data.len() {
                    return Err(Error::out_of_bounds(index, self.data.len()));
                }
                Ok(self.data.remove(index))
            }

            pub fn clear(&mut self) {
                self.data.clear();
            }

            /// The element at `index` as a scalar tag.
            pub fn element(&self, index: usize) -> Option<Tag> {
                self.data.get(index).map(|v| Tag::$scalar(*v))
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self.data.iter())
            }
        }
    };
}

array_type!(
    /// NBT `TAG_Byte_Array`: a sequence of i8 stored unboxed.
    ByteArray,
    i8,
    Byte
);
array_type!(
    /// NBT `TAG_Int_Array`: a sequence of i32 stored unboxed.
    IntArray,
    i32,
    Int
);
array_type!(
    /// NBT `TAG_Long_Array`: a sequence of i64 stored unboxed.
    LongArray,
    i64,
    Long
);
