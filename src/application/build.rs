//! Build pipeline
//!
//! Compile the package to `bin/index.wasm`, then write `bin/index.mjs`.
//! Both land in place only after every step succeeded: the compiler writes
//! into a staging directory next to the outputs and the wrapper is written to
//! a temp file, then both are renamed over the previous pair.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::shim::RuntimeShim;
use crate::application::wrapper::render_wrapper;
use crate::domain::ports::WasmCompiler;
use crate::domain::value_objects::{BuildArtifacts, WASM_FILE, WRAPPER_FILE};
use crate::error::{PackError, PackResult};

/// Options affecting generated content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Appended to the wasm import specifier in the wrapper
    pub import_wasm_suffix: String,
}

impl BuildOptions {
    pub fn with_import_wasm_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.import_wasm_suffix = suffix.into();
        self
    }
}

/// Produces the wasm binary and its wrapper module
pub struct BuildPipeline<C> {
    compiler: C,
    shim: RuntimeShim,
    options: BuildOptions,
}

impl<C: WasmCompiler> BuildPipeline<C> {
    pub fn new(compiler: C, shim: RuntimeShim, options: BuildOptions) -> Self {
        Self {
            compiler,
            shim,
            options,
        }
    }

    /// Build the package in `build_dir`
    pub fn build(&self, build_dir: &Path) -> PackResult<BuildArtifacts> {
        let artifacts = BuildArtifacts::for_build_dir(build_dir);
        let out_dir = artifacts.output_dir().to_path_buf();
        fs::create_dir_all(&out_dir).map_err(write_error(&out_dir))?;

        let staging = tempfile::Builder::new()
            .prefix(".index.wasm.")
            .tempdir_in(&out_dir)
            .map_err(write_error(&out_dir))?;
        let staged_wasm = staging.path().join(WASM_FILE);

        self.compiler.compile(build_dir, &staged_wasm)?;

        let wrapper = render_wrapper(WASM_FILE, &self.options.import_wasm_suffix, self.shim.code());
        let mut tmp = tempfile::Builder::new()
            .prefix(".index.mjs.")
            .tempfile_in(&out_dir)
            .map_err(write_error(&artifacts.wrapper))?;
        tmp.write_all(wrapper.as_bytes())
            .map_err(write_error(&artifacts.wrapper))?;

        fs::rename(&staged_wasm, &artifacts.wasm).map_err(write_error(&artifacts.wasm))?;
        tmp.persist(&artifacts.wrapper)
            .map_err(|e| write_error(&artifacts.wrapper)(e.error))?;

        crate::info!("{}", summary_line(&artifacts, std::env::current_dir().ok().as_deref()));
        Ok(artifacts)
    }
}

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> PackError + '_ {
    move |source| PackError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// `app/bin/{index.mjs,index.wasm} generated.`
///
/// The directory is shown relative to `cwd` when it lies below it.
pub fn summary_line(artifacts: &BuildArtifacts, cwd: Option<&Path>) -> String {
    let dir = artifacts.output_dir();
    let shown: PathBuf = cwd
        .and_then(|cwd| dir.strip_prefix(cwd).ok())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    format!(
        "{}/{{{},{}}} generated.",
        shown.display(),
        WRAPPER_FILE,
        WASM_FILE
    )
}
