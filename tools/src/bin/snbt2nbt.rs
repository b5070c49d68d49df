use std::fs::File;
use std::io::BufWriter;

use clap::{App, Arg};
use log::info;
use treenbt_tools::{init_logging, parse_compression, parse_depth, read_text, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("snbt2nbt")
        .about("convert an SNBT compound to a binary NBT file")
        .arg(
            Arg::with_name("input")
                .required(true)
                .help("SNBT file to convert, or - for stdin"),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .short("o")
                .takes_value(true)
                .required(true)
                .help("NBT file to write"),
        )
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .short("c")
                .takes_value(true)
                .default_value("gzip")
                .help("gzip, zlib or none"),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .default_value("")
                .help("name of the root compound"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .takes_value(true)
                .help("maximum nesting depth to write"),
        )
        .get_matches();

    let compression = parse_compression(matches.value_of("compression").unwrap_or("gzip"))?;
    let depth = parse_depth(matches.value_of("depth"))?;
    let name = matches.value_of("name").unwrap_or_default();
    let out = matches.value_of("out").unwrap_or_default();

    let text = read_text(matches.value_of("input").unwrap_or("-"))?;
    let root = treesnbt::from_str(&text)?;

    let writer = BufWriter::new(File::create(out)?);
    treenbt::ser::to_writer_with_depth(writer, name, &root, compression, depth)?;

    info!("wrote {} entries to {} ({})", root.len(), out, compression);
    Ok(())
}
