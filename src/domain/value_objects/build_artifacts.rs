//! Build artifact locations

use std::path::{Path, PathBuf};

/// Subdirectory of the package that receives both artifacts
pub const OUTPUT_DIR: &str = "bin";
/// Compiled binary file name
pub const WASM_FILE: &str = "index.wasm";
/// Bootstrap wrapper file name
pub const WRAPPER_FILE: &str = "index.mjs";

/// The wasm binary and its wrapper module
///
/// Both paths are a pure function of the package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub wasm: PathBuf,
    pub wrapper: PathBuf,
}

impl BuildArtifacts {
    pub fn for_build_dir(build_dir: &Path) -> Self {
        let out = Self::output_dir_of(build_dir);
        Self {
            wasm: out.join(WASM_FILE),
            wrapper: out.join(WRAPPER_FILE),
        }
    }

    /// `<build_dir>/bin`
    pub fn output_dir_of(build_dir: &Path) -> PathBuf {
        build_dir.join(OUTPUT_DIR)
    }

    pub fn output_dir(&self) -> &Path {
        self.wasm.parent().unwrap_or_else(|| Path::new(""))
    }
}
