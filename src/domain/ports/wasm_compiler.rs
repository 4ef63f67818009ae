//! WasmCompiler port - the external compiler invocation

use std::path::Path;

use crate::error::PackResult;

/// Compiles the package in `package_dir` into a wasm binary at `output`
///
/// Implementations:
/// - `GoCompiler` - `go build` with `GOOS=js GOARCH=wasm`
pub trait WasmCompiler {
    /// Fails with `PackError::Compile` carrying the combined process output
    fn compile(&self, package_dir: &Path, output: &Path) -> PackResult<()>;
}
