// Taken from serde_json and modified for NBT
// https://github.com/serde-rs/json/blob/829175e6069fb16672875f125f6afdd7c6da1dec/src/macros.rs#L60-L303
//
// The source uses the MIT license, which is repeated here:
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

/// Produce a [`Tag`][`crate::Tag`] using
/// JSON/[SNBT](https://minecraft.wiki/w/NBT_format#SNBT_format)-like
/// syntax.
///
/// Example:
/// ```rust
/// use treenbt::{tag, Kind};
/// let t = tag!({
///     "key1": "value1",
///     "key2": 42,
///     "key3": [4, 2],
/// });
/// assert_eq!(t.kind(), Kind::Compound);
/// ```
///
/// Unlike SNBT, key/field names for compounds need quoted strings. `"key1"`
/// above could not be simplified to just `key1`. Leaf values go through
/// `Tag::from`, so Rust's types pick the kind: `42` is an Int, `42i64` a Long.
///
/// NBT Arrays are supported with
/// [SNBT](https://minecraft.wiki/w/NBT_format#SNBT_format) syntax:
///
/// ```rust
/// # use treenbt::tag;
/// let _ = tag!({
///     "bytes": [B; 1, 2, 3],
///     "ints": [I; 1, 2, 3],
///     "longs": [L; 1, 2, 3],
/// });
/// ```
///
/// # Panics
///
/// If the elements of a list are not all the same kind.
///
#[macro_export(local_inner_macros)]
macro_rules! tag {
    // Hide distracting implementation details from the generated rustdoc.
    ($($tag:tt)+) => {
        tag_internal!($($tag)+)
    };
}

#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! tag_internal {
    // List elements. Converted tags collect in the leading brackets, each
    // followed by a comma.
    (@list [$($elems:expr,)*]) => {
        tag_internal_vec![$($elems,)*]
    };

    (@list [$($elems:expr,)*] , $($rest:tt)*) => {
        tag_internal!(@list [$($elems,)*] $($rest)*)
    };

    (@list [$($elems:expr,)*] [$($list:tt)*] $($rest:tt)*) => {
        tag_internal!(@list [$($elems,)* tag_internal!([$($list)*]),] $($rest)*)
    };

    (@list [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        tag_internal!(@list [$($elems,)* tag_internal!({$($map)*}),] $($rest)*)
    };

    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        tag_internal!(@list [$($elems,)* tag_internal!($next),] $($rest)*)
    };

    (@list [$($elems:expr,)*] $last:expr) => {
        tag_internal!(@list [$($elems,)* tag_internal!($last),])
    };

    // Compound entries. Key tokens gather in the first parens until a colon
    // turns up at the front of the rest.
    (@object $object:ident () ()) => {};

    (@object $object:ident () (, $($rest:tt)*)) => {
        tag_internal!(@object $object () ($($rest)*));
    };

    (@object $object:ident ($($key:tt)+) (: [$($list:tt)*] $($rest:tt)*)) => {
        let _ = $object.put(($($key)+), tag_internal!([$($list)*]));
        tag_internal!(@object $object () ($($rest)*));
    };

    (@object $object:ident ($($key:tt)+) (: {$($map:tt)*} $($rest:tt)*)) => {
        let _ = $object.put(($($key)+), tag_internal!({$($map)*}));
        tag_internal!(@object $object () ($($rest)*));
    };

    (@object $object:ident ($($key:tt)+) (: $value:expr, $($rest:tt)*)) => {
        let _ = $object.put(($($key)+), tag_internal!($value));
        tag_internal!(@object $object () ($($rest)*));
    };

    (@object $object:ident ($($key:tt)+) (: $value:expr)) => {
        let _ = $object.put(($($key)+), tag_internal!($value));
    };

    (@object $object:ident ($($key:tt)*) ($tt:tt $($rest:tt)*)) => {
        tag_internal!(@object $object ($($key)* $tt) ($($rest)*));
    };

    // Typed arrays take their elements as plain numbers.
    ([B; $($elems:tt)*]) => {
        $crate::Tag::ByteArray($crate::ByteArray::new(tag_internal_vec![$($elems)*]))
    };

    ([I; $($elems:tt)*]) => {
        $crate::Tag::IntArray($crate::IntArray::new(tag_internal_vec![$($elems)*]))
    };

    ([L; $($elems:tt)*]) => {
        $crate::Tag::LongArray($crate::LongArray::new(tag_internal_vec![$($elems)*]))
    };

    ([]) => {
        $crate::Tag::List($crate::List::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Tag::List(
            $crate::List::from_tags(tag_internal!(@list [] $($tt)+))
                .expect("tag! list elements must all be the same kind"),
        )
    };

    ({}) => {
        $crate::Tag::Compound($crate::Compound::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Tag::Compound({
            let mut object = $crate::Compound::new();
            tag_internal!(@object object () ($($tt)+));
            object
        })
    };

    // Anything else is a leaf value.
    ($other:expr) => {
        $crate::Tag::from($other)
    };
}

// tag_internal uses local_inner_macros, so a vec! there would resolve to
// $crate::vec.
#[macro_export]
#[doc(hidden)]
macro_rules! tag_internal_vec {
    ($($content:tt)*) => {
        vec![$($content)*]
    };
}
