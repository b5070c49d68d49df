//! Helpers shared by the treenbt command line tools.
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use env_logger::Env;
use log::debug;
use treenbt::{Compound, Compression, DEFAULT_MAX_DEPTH};
use treesnbt::{Palette, Stringifier};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug)]
pub struct ErrorMessage(pub String);

impl std::error::Error for ErrorMessage {}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Read an NBT file of any compression, returning the root's name and body.
pub fn read_nbt_file(path: impl AsRef<Path>, max_depth: usize) -> Result<(String, Compound)> {
    let mut reader = BufReader::new(File::open(path)?);
    let compression = Compression::sniff(&mut reader)?;
    debug!("reading {} nbt", compression);
    Ok(treenbt::de::read_root(reader, compression, max_depth)?)
}

/// Contents of the file at `path`, or of stdin if it is `-`.
pub fn read_text(path: &str) -> Result<String> {
    let mut text = String::new();
    if path == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        File::open(path)?.read_to_string(&mut text)?;
    }
    Ok(text)
}

pub fn parse_compression(name: &str) -> Result<Compression> {
    match name {
        "gzip" | "gz" => Ok(Compression::Gzip),
        "zlib" => Ok(Compression::Zlib),
        "none" | "uncompressed" => Ok(Compression::Uncompressed),
        other => Err(Box::new(ErrorMessage(format!(
            "unknown compression {:?}, expected gzip, zlib or none",
            other
        )))),
    }
}

pub fn parse_depth(depth: Option<&str>) -> Result<usize> {
    match depth {
        Some(d) => Ok(d.parse()?),
        None => Ok(DEFAULT_MAX_DEPTH),
    }
}

/// Parse chunk coordinates written as `x,z`.
pub fn parse_coord(coord: &str) -> Option<(usize, usize)> {
    let mut s = coord.split(',');
    let x = s.next()?.trim().parse().ok()?;
    let z = s.next()?.trim().parse().ok()?;
    if s.next().is_some() {
        return None;
    }
    Some((x, z))
}

/// SNBT writer for terminal output, colored if asked.
pub fn stringifier(color: bool, max_depth: usize) -> Stringifier {
    let palette = if color {
        Palette::ansi()
    } else {
        Palette::plain()
    };
    Stringifier::new().palette(palette).max_depth(max_depth)
}
