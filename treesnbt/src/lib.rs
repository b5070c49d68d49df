//! treesnbt reads and writes the stringified form of NBT (SNBT) used by
//! Minecraft commands, and evaluates NBT *paths* against a tree.
//!
//! Trees are the [`treenbt`] model: [`Tag`][treenbt::Tag],
//! [`Compound`][treenbt::Compound] and [`List`][treenbt::List].
//!
//! # SNBT
//!
//! ```
//! # fn main() -> treesnbt::error::Result<()> {
//! let c = treesnbt::from_str(r#"{name: "Steve", Health: 20.0f, Pos: [1.5d, 64.0d]}"#)?;
//! assert_eq!(c.get_float("Health").unwrap(), 20.0);
//!
//! let text = treesnbt::to_string(&c);
//! assert_eq!(treesnbt::from_str(&text)?, c);
//! # Ok(())
//! # }
//! ```
//!
//! Stringifying follows the same grammar that parsing accepts, so a tree
//! survives a round trip. A colored rendering is available through
//! [`Stringifier`] and [`Palette`].
//!
//! # Paths
//!
//! ```
//! use treenbt::Tag;
//! use treesnbt::Path;
//!
//! # fn main() -> treesnbt::error::Result<()> {
//! let tree = Tag::Compound(treesnbt::from_str("{a: [10, 20, 30]}")?);
//!
//! let path: Path = "a[-1]".parse()?;
//! let found = path.traverse(&tree);
//! assert_eq!(*found[0], Tag::Int(30));
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod path;

mod de;
mod input;
mod number;
mod ser;

pub use de::{from_str, value_from_str};
pub use path::{Node, Path, PathNode, Step};
pub use ser::{tag_to_string, to_colored_string, to_string, Palette, Stringifier};

#[cfg(test)]
mod test;
