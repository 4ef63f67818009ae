#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Shim transformation - this should never panic
        let _ = go_wasm_pack::RuntimeShim::from_source(source);
    }
});
