use clap::{App, Arg};
use log::{info, warn};
use treeanvil::Region;
use treenbt_tools::{init_logging, parse_coord, stringifier, ErrorMessage, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("region-dump")
        .about("list the chunks of a region file, or print one of them")
        .arg(Arg::with_name("file").required(true).help("region file (.mca)"))
        .arg(
            Arg::with_name("chunk")
                .long("chunk")
                .takes_value(true)
                .help("print the chunk at x,z as SNBT"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .help("color output for a terminal"),
        )
        .get_matches();

    let region = Region::load(matches.value_of("file").unwrap_or_default())?;
    info!("{} chunks present", region.len());

    if let Some(coord) = matches.value_of("chunk") {
        let (x, z) = parse_coord(coord)
            .ok_or_else(|| ErrorMessage(format!("expected chunk as x,z, got {:?}", coord)))?;

        match region.chunk(x, z)? {
            Some(chunk) => {
                let out = stringifier(matches.is_present("color"), treenbt::DEFAULT_MAX_DEPTH);
                println!("{}", out.stringify_compound(chunk.data()));
            }
            None => warn!("no chunk at {},{}", x, z),
        }
        return Ok(());
    }

    for (x, z, chunk) in region.chunks() {
        let compression = chunk.compression().unwrap_or_else(|| region.compression());
        println!(
            "{:>2} {:>2} {:>12} {:>12} {} entries",
            x,
            z,
            compression.to_string(),
            region.timestamp(x, z)?,
            chunk.data().len()
        );
    }

    Ok(())
}
