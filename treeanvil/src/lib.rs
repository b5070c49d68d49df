//! For handling Minecraft's region files: up to 32×32 chunk trees packed
//! into 4 KiB sectors behind two header tables.
//!
//! A [`Region`] is held fully in memory. Reading parses every chunk;
//! writing lays the whole file out again from scratch.
//!
//! ```
//! use std::io::Cursor;
//! use treenbt::Compound;
//! use treeanvil::{Chunk, Region};
//!
//! # fn main() -> treeanvil::Result<()> {
//! let mut data = Compound::new();
//! data.put("DataVersion", 3465);
//!
//! let mut region = Region::new();
//! region.set_chunk(3, 4, Chunk::new(data))?;
//! region.set_timestamp(3, 4, 1_700_000_000)?;
//!
//! let mut file = Cursor::new(Vec::new());
//! region.to_writer(&mut file)?;
//!
//! let loaded = Region::from_reader(&mut file)?;
//! let chunk = loaded.chunk(3, 4)?.unwrap();
//! assert_eq!(chunk.data().get_int("DataVersion").unwrap(), 3465);
//! assert_eq!(loaded.timestamp(3, 4)?, 1_700_000_000);
//! # Ok(())
//! # }
//! ```

mod error;
mod region;

pub use error::*;
pub use region::*;
