//! `go build` as the wasm compiler

use std::path::Path;

use crate::domain::ports::WasmCompiler;
use crate::error::{PackError, PackResult};

use super::GoToolchain;

/// Runs `go build -o <output>` in the package directory
#[derive(Debug, Clone, Default)]
pub struct GoCompiler {
    toolchain: GoToolchain,
}

impl GoCompiler {
    pub fn new(toolchain: GoToolchain) -> Self {
        Self { toolchain }
    }
}

impl WasmCompiler for GoCompiler {
    fn compile(&self, package_dir: &Path, output: &Path) -> PackResult<()> {
        let result = self
            .toolchain
            .wasm_command(["build", "-o"])
            .arg(output)
            .current_dir(package_dir)
            .output();

        let out = result.map_err(|e| PackError::Compile {
            status: format!("failed to run {}", self.toolchain.go.display()),
            output: e.to_string(),
        })?;

        if !out.status.success() {
            let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&out.stderr));
            return Err(PackError::Compile {
                status: out.status.to_string(),
                output: combined.trim_end().to_string(),
            });
        }
        Ok(())
    }
}
