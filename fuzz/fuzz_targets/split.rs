#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use rectsweeper::arbitrary::arbtests::split_properties;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let _ = split_properties(&mut u);
});
