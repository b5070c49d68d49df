#![no_main]
use libfuzzer_sys::fuzz_target;

use treenbt::{from_bytes, to_bytes, Compound, Compression, Tag};

fuzz_target!(|v: Tag| {
    let mut root = Compound::new();
    root.put("", v);

    let bs = to_bytes("", &root, Compression::Uncompressed).unwrap();
    let wrapper = from_bytes(&bs).unwrap();
    let root = wrapper.get_compound("").unwrap();

    // NaN floats make trees unequal to themselves, so compare bytes.
    assert_eq!(to_bytes("", root, Compression::Uncompressed).unwrap(), bs);
});
