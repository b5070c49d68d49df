#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(tag) = treesnbt::value_from_str(text) {
        let _ = treesnbt::tag_to_string(&tag);
    }
});
