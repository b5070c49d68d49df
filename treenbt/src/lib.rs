//! treenbt is a tagged-tree model of the data Minecraft stores in its NBT
//! files, plus the binary codec that reads and writes that format.
//!
//! * For the tree itself see [`Tag`], [`Compound`] and [`List`].
//! * For the closed set of tag kinds and their wire ids see [`Kind`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For gzip/zlib handling see [`Compression`].
//! * For reading and writing binary NBT see [`de`] and [`ser`].
//!
//! The textual SNBT format and the path query language live in the
//! `treesnbt` crate. Region files live in `treeanvil`.
//!
//! ```toml
//! [dependencies]
//! treenbt = "0.3"
//! ```
//!
//! # Quick example
//!
//! Build a tree, write it gzip compressed, and read it back. Reading detects
//! the compression by itself and hands back a wrapper compound with the
//! root stored under its name (usually the empty string).
//!
//! ```
//! use treenbt::{tag, Compound, Compression, Tag};
//!
//! # fn main() -> treenbt::error::Result<()> {
//! let mut player = Compound::new();
//! player.put("Health", 20.0f32);
//! player.put("Name", "Steve");
//! player.put("Pos", tag!([1.5, 64.0, -3.25]));
//!
//! let bytes = treenbt::to_bytes("", &player, Compression::Gzip)?;
//! let wrapper = treenbt::from_bytes(&bytes)?;
//!
//! assert_eq!(wrapper.get_compound("")?, &player);
//! assert_eq!(wrapper.get_compound("")?.get_float("Health")?, 20.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Depth
//!
//! Every codec walks the tree recursively, bounded by a depth budget that is
//! passed explicitly (see [`DEFAULT_MAX_DEPTH`]). When writing, compounds
//! and lists found at the end of the budget are written empty rather than
//! failing. When reading, a stream nested deeper than the budget is an error.
//!
//! The root's own entries are the first level, so a budget of `n` keeps
//! entries up to `n` levels below the root, and the same holds for reading
//! and for SNBT.

// Generates the per-kind convenience getters on `Compound` and `List`. Each
// getter is a projection of the container's `get` with a kind check.
macro_rules! typed_getters {
    ($at:ty; $($fn_name:ident: $variant:ident -> $ret:ty = |$v:ident| $out:expr;)*) => {
        $(
            #[doc = concat!("Get the `", stringify!($variant), "` at the given position. Fails with `WrongKind` if the tag is another kind.")]
            pub fn $fn_name(&self, at: $at) -> $crate::error::Result<$ret> {
                match self.get(at)? {
                    $crate::Tag::$variant($v) => Ok($out),
                    other => Err($crate::error::Error::wrong_kind(
                        $crate::Kind::$variant,
                        other.kind(),
                    )),
                }
            }
        )*
    };
}

pub mod de;
pub mod error;
pub mod ser;

mod arrays;
mod compound;
mod compression;
mod export;
mod kind;
mod list;
mod macros;
mod tag;

pub use arrays::*;
pub use compound::Compound;
pub use compression::*;
pub use de::{from_bytes, from_reader, from_reader_with};
pub use kind::Kind;
pub use list::List;
pub use ser::{to_bytes, to_writer};
pub use tag::Tag;

#[cfg(test)]
mod test;

/// The depth budget used by the codecs when the caller does not give one.
pub const DEFAULT_MAX_DEPTH: usize = 512;
