//! Test environment builder for isolated go-wasm-pack runs.
//!
//! `TestEnv` lays out a Go module in a temp directory:
//!
//! ```text
//! go.mod
//! app/main.go      example.com/demo/app  (entry, imports lib, fmt)
//! lib/lib.go       example.com/demo/lib
//! ```
//!
//! The `go` binary is a shell script answering `go list` from a prepared
//! listing and faking `go build`. GOROOT points at a fake toolchain root
//! holding only `lib/wasm/wasm_exec.js`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use serde_json::json;
use tempfile::TempDir;

use super::fixtures::{STUB_GO, WASM_EXEC_JS};

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated module plus stub toolchain
pub struct TestEnv {
    /// The Go module root
    pub project_root: TempDir,
    /// Stub `go`, fake GOROOT and the stub's control files
    pub toolchain_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().unwrap();
        let toolchain_dir = tempfile::tempdir().unwrap();

        let root = project_root.path();
        fs::write(root.join("go.mod"), "module example.com/demo\n\ngo 1.22\n").unwrap();
        for (rel, body) in [
            ("app/main.go", "package main\n\nimport _ \"example.com/demo/lib\"\n\nfunc main() {}\n"),
            ("lib/lib.go", "package lib\n"),
        ] {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }

        let tools = toolchain_dir.path();
        let go = tools.join("go");
        fs::write(&go, STUB_GO.replace("__STUB_DIR__", &tools.display().to_string())).unwrap();
        fs::set_permissions(&go, fs::Permissions::from_mode(0o755)).unwrap();

        let shim = tools.join("goroot/lib/wasm/wasm_exec.js");
        fs::create_dir_all(shim.parent().unwrap()).unwrap();
        fs::write(shim, WASM_EXEC_JS).unwrap();

        let env = Self {
            project_root,
            toolchain_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_go-wasm-pack")),
        };
        env.write_listing();
        env
    }

    /// Get path relative to the module root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn go(&self) -> PathBuf {
        self.toolchain_dir.path().join("go")
    }

    /// What `go list -deps -json ./app` prints for the fixture module
    fn write_listing(&self) {
        let root = self.project_root.path();
        let module = json!({
            "Path": "example.com/demo",
            "Main": true,
            "Dir": root,
            "GoMod": root.join("go.mod"),
        });
        let packages = [
            json!({
                "ImportPath": "fmt",
                "Dir": "/usr/local/go/src/fmt",
                "Standard": true,
                "DepOnly": true,
            }),
            json!({
                "ImportPath": "example.com/demo/lib",
                "Dir": root.join("lib"),
                "Module": module.clone(),
                "DepOnly": true,
            }),
            json!({
                "ImportPath": "example.com/demo/app",
                "Dir": root.join("app"),
                "Module": module.clone(),
                "Imports": ["example.com/demo/lib", "fmt"],
            }),
        ];
        let listing: Vec<String> = packages
            .iter()
            .map(|p| serde_json::to_string_pretty(p).unwrap())
            .collect();
        fs::write(self.toolchain_dir.path().join("list.json"), listing.join("\n")).unwrap();
    }

    /// Make the next `go list` fail with `stderr`
    pub fn fail_list(&self, stderr: &str) {
        fs::write(self.toolchain_dir.path().join("list.err"), stderr).unwrap();
    }

    /// Make every `go build` fail with `stderr` until cleared
    pub fn fail_build(&self, stderr: &str) {
        fs::write(self.toolchain_dir.path().join("build.err"), stderr).unwrap();
    }

    pub fn clear_build_failure(&self) {
        let _ = fs::remove_file(self.toolchain_dir.path().join("build.err"));
    }

    /// Directories `go build` ran in, one per build
    pub fn builds(&self) -> Vec<String> {
        fs::read_to_string(self.toolchain_dir.path().join("builds.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .arg("--go")
            .arg(self.go())
            .args(args)
            .env("GOROOT", self.toolchain_dir.path().join("goroot"));
        cmd
    }

    /// Run the CLI from the module root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command(args).output().expect("failed to run go-wasm-pack");
        TestResult::from_output(output)
    }

    /// Start the CLI with piped stdout
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn go-wasm-pack")
    }
}

/// `path` as the JSON string `--list` prints for it
pub fn json_path(path: &Path) -> String {
    serde_json::to_string(&path.to_string_lossy()).unwrap()
}
