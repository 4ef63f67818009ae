//! Runtime shim transformation
//!
//! Go ships `wasm_exec.js`, a script that installs a `Go` class on the global
//! object and polyfills Node APIs. The wrapper module needs only the class,
//! running in a browser-like host. The body of the IIFE is cut out between
//! two markers, host checks are patched to constants, and the result goes
//! through a syntax-only minify so the dead branches disappear while names
//! and layout stay readable.

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// First statement of the IIFE body
pub const START_MARKER: &str = "const enosys =";
/// Close of the IIFE
pub const END_MARKER: &str = "})();";

const KEEP_ALIVE: &str = "export { Go };";

/// Textual patches applied after `global` is renamed to `globalThis`
const PATCHES: &[(&str, &str)] = &[
    ("globalThis.Go = class", "class Go"),
    (r#"typeof module !== "undefined""#, "false"),
    ("!globalThis.TextDecoder", "false"),
    ("!globalThis.TextEncoder", "false"),
    ("!globalThis.performance", "false"),
    ("!globalThis.crypto", "false"),
    ("!globalThis.process", "false"),
    ("!globalThis.fs", "true"),
];

/// The transformed shim, ready to be embedded in the wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeShim {
    code: String,
}

impl RuntimeShim {
    /// Transform the upstream `wasm_exec.js` text
    ///
    /// Fails when the markers are missing or nothing is left between them.
    pub fn from_source(source: &str) -> Result<Self, String> {
        let patched = patch(extract(source)?);
        let code = match minify_syntax(&patched) {
            Some(code) => code,
            None => {
                crate::debug!("runtime shim kept unminified");
                patched
            }
        };
        Ok(Self { code })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// The span from the start marker up to (excluding) the end marker
pub fn extract(source: &str) -> Result<&str, String> {
    let start = source
        .find(START_MARKER)
        .ok_or_else(|| format!("start marker `{}` not found", START_MARKER))?;
    let len = source[start..]
        .find(END_MARKER)
        .ok_or_else(|| format!("end marker `{}` not found", END_MARKER))?;

    let body = &source[start..start + len];
    if body.trim().is_empty() {
        return Err("nothing between markers".to_string());
    }
    Ok(body)
}

/// Rename `global` to `globalThis` and pin the host checks
pub fn patch(body: &str) -> String {
    PATCHES
        .iter()
        .fold(rename_global(body), |code, (from, to)| code.replace(from, to))
}

/// Replace the identifier `global`, leaving `globalThis` and other longer
/// identifiers untouched
fn rename_global(code: &str) -> String {
    const WORD: &str = "global";
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';

    let mut out = String::with_capacity(code.len() + 64);
    let mut rest = code;
    while let Some(pos) = rest.find(WORD) {
        let before = rest[..pos].chars().next_back().or_else(|| out.chars().next_back());
        let after = rest[pos + WORD.len()..].chars().next();
        out.push_str(&rest[..pos]);
        if before.is_some_and(is_ident) || after.is_some_and(is_ident) {
            out.push_str(WORD);
        } else {
            out.push_str("globalThis");
        }
        rest = &rest[pos + WORD.len()..];
    }
    out.push_str(rest);
    out
}

/// Compress syntax only: no mangling, no whitespace minification
///
/// Returns `None` when the code does not parse or the `Go` class did not
/// survive, so the caller can fall back to the patched text.
fn minify_syntax(code: &str) -> Option<String> {
    // Exporting the class keeps the compressor from dropping it as unused
    let source = format!("{}\n{}", code, KEEP_ALIVE);
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, &source, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: None,
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let out = Codegen::new()
        .with_options(CodegenOptions {
            minify: false,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;

    let end = out.rfind("export")?;
    let code = out[..end].trim_end();
    code.contains("class Go").then(|| format!("{}\n", code))
}
