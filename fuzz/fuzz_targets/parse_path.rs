#![no_main]
use libfuzzer_sys::fuzz_target;

use treesnbt::Path;

fuzz_target!(|text: &str| {
    if let Ok(path) = Path::parse(text) {
        let _ = Path::parse(&path.to_string());
    }
});
