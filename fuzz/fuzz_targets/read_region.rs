#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;
use treeanvil::Region;

fuzz_target!(|data: &[u8]| {
    let _ = Region::from_reader(Cursor::new(data));
});
