//! Property tests for dependency closure computation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use go_wasm_pack::application::compute_closure;
use go_wasm_pack::{Module, PackageNode, ResolvedPackages};

const MOD: &str = "example.com/app";

fn module() -> Module {
    Module::new(MOD, "/src/app", "/src/app/go.mod")
}

/// Package `i` of a random graph over `n` packages; `0` is the entry
fn import_path(i: usize) -> String {
    if i == 0 {
        MOD.to_string()
    } else {
        format!("{}/p{}", MOD, i)
    }
}

fn resolved(edges: &[Vec<usize>], externals: bool) -> ResolvedPackages {
    let mut resolved = ResolvedPackages::new(MOD);
    for (i, imports) in edges.iter().enumerate() {
        let mut imports: Vec<String> = imports.iter().map(|&j| import_path(j)).collect();
        if externals {
            imports.push("github.com/other/lib".to_string());
            imports.push("fmt".to_string());
        }
        resolved.insert(PackageNode {
            import_path: import_path(i),
            dir: PathBuf::from("/unused"),
            imports,
            module: Some(module()),
        });
    }
    resolved
}

fn reachable(edges: &[Vec<usize>]) -> Vec<bool> {
    let mut seen = vec![false; edges.len()];
    let mut stack = vec![0];
    while let Some(i) = stack.pop() {
        if std::mem::replace(&mut seen[i], true) {
            continue;
        }
        stack.extend(edges[i].iter().copied());
    }
    seen
}

fn graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..8).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The closure is the manifest plus every reachable in-module
    /// package, whatever the import order and however many cycles.
    #[test]
    fn property_closure_is_reachable_set(edges in graph(), externals in any::<bool>()) {
        let graph = compute_closure(MOD, &resolved(&edges, externals)).unwrap();

        let m = module();
        let mut expected: Vec<PathBuf> = reachable(&edges)
            .iter()
            .enumerate()
            .filter(|(_, r)| **r)
            .map(|(i, _)| m.package_dir(&import_path(i)).unwrap())
            .collect();
        expected.push(m.manifest.clone());
        expected.sort();

        let actual: Vec<PathBuf> = graph.watch_paths.iter().map(Path::to_path_buf).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(graph.build_dir, PathBuf::from("/src/app"));
    }

    /// PROPERTY: Reversing every import list leaves the closure unchanged.
    #[test]
    fn property_closure_ignores_import_order(edges in graph()) {
        let reversed: Vec<Vec<usize>> = edges
            .iter()
            .map(|imports| imports.iter().rev().copied().collect())
            .collect();

        let a = compute_closure(MOD, &resolved(&edges, true)).unwrap();
        let b = compute_closure(MOD, &resolved(&reversed, true)).unwrap();

        prop_assert_eq!(a.watch_paths, b.watch_paths);
    }
}
