//! Bootstrap wrapper module (`index.mjs`)

/// Render the wrapper for `wasm_file`
///
/// `import_suffix` is appended to the import specifier only, for bundlers
/// that select a loader by query (`?url`, `?module`).
pub fn render_wrapper(wasm_file: &str, import_suffix: &str, shim: &str) -> String {
    let mut out = format!("import wasm from \"./{}{}\"\n", wasm_file, import_suffix);
    out.push_str(shim.trim_end());
    out.push_str(MAIN);
    out
}

const MAIN: &str = r#"

export const main = async () => {
    const go = new Go();

    return WebAssembly
        .instantiateStreaming(
            fetch(wasm),
            go.importObject
        )
        .then((result) => go.run(result.instance));
}
"#;
