#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary `go list -json` output - this should never panic
    if let Ok(resolved) = go_wasm_pack::infrastructure::go::parse_package_stream(".", data) {
        let _ = go_wasm_pack::application::compute_closure(".", &resolved);
    }
});
