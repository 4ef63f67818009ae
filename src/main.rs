//! go-wasm-pack CLI
//!
//! Usage: go-wasm-pack [--watch] [--list] [--import-wasm-suffix SUFFIX] <ENTRY>
//!
//! Modes:
//!   (default)  Build once and exit
//!   --watch    Build, then rebuild on every change in the module closure
//!   --list     Print the watched files as JSON strings and exit

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use go_wasm_pack::application::{ModuleGraphLoader, OrchestratorContext};
use go_wasm_pack::infrastructure::go::load_runtime_shim;
use go_wasm_pack::infrastructure::GoToolchain;
use go_wasm_pack::presentation::{create_build_engine, create_rebuild_trigger, create_resolver, Cli};
use go_wasm_pack::{logger, BuildOptions};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    let Some(entry) = cli.entry.as_deref() else {
        return Ok(ExitCode::SUCCESS);
    };
    let toolchain = GoToolchain::new(&cli.go);

    if cli.list {
        return cmd_list(entry, &toolchain);
    }

    let options = BuildOptions::default().with_import_wasm_suffix(&cli.import_wasm_suffix);
    if cli.watch {
        cmd_watch(entry, &toolchain, options, &cli)
    } else {
        cmd_build(entry, &toolchain, options)
    }
}

fn cmd_list(entry: &str, toolchain: &GoToolchain) -> Result<ExitCode> {
    let loader = ModuleGraphLoader::new(create_resolver(toolchain));
    let graph = match loader.load(entry) {
        Ok(graph) => graph,
        Err(err) => {
            go_wasm_pack::error!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    for path in &graph.watch_paths {
        let line = serde_json::to_string(&path.to_string_lossy())?;
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_build(entry: &str, toolchain: &GoToolchain, options: BuildOptions) -> Result<ExitCode> {
    let shim = load_runtime_shim(toolchain).context("load runtime shim")?;
    let engine = create_build_engine(entry, toolchain, shim, options);

    match engine.run_once() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            go_wasm_pack::error!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_watch(
    entry: &str,
    toolchain: &GoToolchain,
    options: BuildOptions,
    cli: &Cli,
) -> Result<ExitCode> {
    let shim = load_runtime_shim(toolchain).context("load runtime shim")?;
    let engine = create_build_engine(entry, toolchain, shim, options);

    let (tx, rx) = OrchestratorContext::channel();
    let trigger = create_rebuild_trigger(engine, tx.clone(), cli.on_watch_error)
        .context("create watcher")?;
    let ctx = OrchestratorContext::spawn(trigger, tx, rx);
    ctx.install_signal_handler()
        .context("install signal handler")?;

    ctx.wait()?;
    Ok(ExitCode::SUCCESS)
}
