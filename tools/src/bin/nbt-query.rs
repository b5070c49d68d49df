use clap::{App, Arg};
use log::info;
use treenbt::Tag;
use treesnbt::Path;
use treenbt_tools::{init_logging, parse_depth, read_nbt_file, stringifier, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("nbt-query")
        .about("print every value an NBT path selects from a file")
        .arg(Arg::with_name("file").required(true).help("NBT file to query"))
        .arg(
            Arg::with_name("path")
                .required(true)
                .help("path to select, eg 'Inventory[{Slot: 0b}].id'"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .help("color output for a terminal"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .takes_value(true)
                .help("maximum nesting depth to read and print"),
        )
        .get_matches();

    let depth = parse_depth(matches.value_of("depth"))?;
    let path = Path::parse(matches.value_of("path").unwrap_or_default())?;
    let (_, root) = read_nbt_file(matches.value_of("file").unwrap_or_default(), depth)?;

    let root = Tag::Compound(root);
    let found = path.traverse(&root);
    info!("{} matched {} values", path, found.len());

    let out = stringifier(matches.is_present("color"), depth);
    for tag in found {
        println!("{}", out.stringify(&tag));
    }

    Ok(())
}
