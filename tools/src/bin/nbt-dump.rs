use clap::{App, Arg};
use log::info;
use treenbt::Tag;
use treenbt_tools::{init_logging, parse_depth, read_nbt_file, stringifier, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("nbt-dump")
        .about("print an NBT file of any compression as SNBT or JSON")
        .arg(Arg::with_name("file").required(true).help("NBT file to dump"))
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print JSON instead of SNBT"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .conflicts_with("json")
                .help("color SNBT output for a terminal"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .takes_value(true)
                .help("maximum nesting depth to read and print"),
        )
        .get_matches();

    let depth = parse_depth(matches.value_of("depth"))?;
    let path = matches.value_of("file").unwrap_or_default();

    let (name, root) = read_nbt_file(path, depth)?;
    info!("root {:?} with {} entries", name, root.len());

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&Tag::Compound(root))?);
    } else {
        let snbt = stringifier(matches.is_present("color"), depth).stringify_compound(&root);
        println!("{}", snbt);
    }

    Ok(())
}
