//! Locating and loading the toolchain's `wasm_exec.js`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::application::shim::RuntimeShim;
use crate::error::{PackError, PackResult};

use super::GoToolchain;

/// Candidate locations under GOROOT, newest layout first
const SHIM_CANDIDATES: [&str; 2] = ["lib/wasm/wasm_exec.js", "misc/wasm/wasm_exec.js"];

/// The toolchain root: `$GOROOT` if set, else `go env GOROOT`
pub fn goroot(toolchain: &GoToolchain) -> PackResult<PathBuf> {
    if let Some(root) = env::var_os("GOROOT").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }

    let shim_err = |message: String| PackError::Shim {
        path: PathBuf::from("$GOROOT"),
        message,
    };

    let out = Command::new(&toolchain.go)
        .args(["env", "GOROOT"])
        .output()
        .map_err(|e| shim_err(format!("failed to run {}: {}", toolchain.go.display(), e)))?;
    if !out.status.success() {
        return Err(shim_err(
            String::from_utf8_lossy(&out.stderr).trim_end().to_string(),
        ));
    }

    let root = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if root.is_empty() {
        return Err(shim_err("go env GOROOT printed nothing".to_string()));
    }
    Ok(PathBuf::from(root))
}

/// First existing `wasm_exec.js` under `goroot`
pub fn locate_runtime_shim(goroot: &Path) -> Option<PathBuf> {
    SHIM_CANDIDATES
        .iter()
        .map(|rel| goroot.join(rel))
        .find(|p| p.is_file())
}

/// Find, read and transform the runtime shim
pub fn load_runtime_shim(toolchain: &GoToolchain) -> PackResult<RuntimeShim> {
    let root = goroot(toolchain)?;
    let path = locate_runtime_shim(&root).ok_or_else(|| PackError::Shim {
        path: root.join(SHIM_CANDIDATES[0]),
        message: "not found".to_string(),
    })?;

    let source = fs::read_to_string(&path).map_err(|e| PackError::Shim {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let shim = RuntimeShim::from_source(&source).map_err(|message| PackError::Shim {
        path: path.clone(),
        message,
    })?;

    crate::debug!("runtime shim from {}", path.display());
    Ok(shim)
}
