//! Temporary corpus directories and a file-level reachability walk
//!
//! The walk only understands the `import "<path>" as <alias>;` lines the
//! emitter writes. It exists so tests can check reachability against the
//! bytes on disk rather than the in-memory graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use corpus_builder::runner::run_generate;
use corpus_builder::CorpusConfig;

/// A corpus generated into its own temporary directory
pub struct CorpusDir {
    dir: TempDir,
}

/// One parsed import line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    pub path: String,
    pub alias: String,
}

impl CorpusDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Generate `config` into this directory (output_dir is overridden)
    pub fn generate(config: CorpusConfig) -> Self {
        let corpus_dir = Self::new();
        let config = CorpusConfig {
            output_dir: corpus_dir.root(),
            ..config
        };
        run_generate(&config, false).expect("generation failed");
        corpus_dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Corpus root inside the temp dir
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("benchmark")
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.root().join(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Every file under the root, keyed by path relative to the root
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut files = BTreeMap::new();
        collect(&self.root(), &self.root(), &mut files);
        files
    }

    /// Run the corpus-builder binary with `args` from the temp dir
    pub fn run_cli(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_corpus-builder"))
            .current_dir(self.path())
            .env_remove("CORPUS_BUILDER_CONFIG")
            .args(args)
            .output()
            .expect("Failed to run CLI")
    }
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.expect("bad dir entry").path())
        .collect();
    entries.sort();
    for path in entries {
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("path outside root")
                .to_string_lossy()
                .replace('\\', "/");
            files.insert(rel, fs::read_to_string(&path).expect("unreadable file"));
        }
    }
}

/// Parse `import "<path>" as <alias>;` lines from module text
pub fn parse_imports(text: &str) -> Vec<ImportLine> {
    text.lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("import \"")?;
            let (path, rest) = rest.split_once("\" as ")?;
            let alias = rest.strip_suffix(';')?;
            Some(ImportLine {
                path: path.to_string(),
                alias: alias.to_string(),
            })
        })
        .collect()
}

/// Follow import lines from `main.mini`; returns the node files visited
/// (paths relative to the corpus root)
pub fn walk_from_entry(files: &BTreeMap<String, String>) -> BTreeSet<String> {
    let mut visited = BTreeSet::new();
    let mut queue: VecDeque<String> = parse_imports(&files["main.mini"])
        .into_iter()
        .map(|i| i.path)
        .collect();

    while let Some(path) = queue.pop_front() {
        if !visited.insert(path.clone()) {
            continue;
        }
        let text = files
            .get(&path)
            .unwrap_or_else(|| panic!("dangling import {}", path));
        for import in parse_imports(text) {
            // node imports are siblings inside files/
            let target = format!("files/{}", import.path);
            if !visited.contains(&target) {
                queue.push_back(target);
            }
        }
    }

    visited
}
