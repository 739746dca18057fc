//! In-memory corpus assembly
//!
//! Builds the dependency graph once, emits every node module in increasing
//! index order, and appends the entry module. Nothing touches the filesystem
//! here; a [`CorpusSink`](crate::writer::CorpusSink) persists the result.

use crate::config::CorpusConfig;
use crate::emitter::{emit_node, render_entry_module, EmitOptions, ModuleSource};
use crate::error::Result;
use crate::graph::{DependencyGraph, GraphStats};
use crate::naming::{index_width, module_path, ENTRY_FILE};
use crate::random::{CorpusRng, StreamMode};
use rayon::prelude::*;
use tracing::{debug, info};

/// One file of the corpus, path relative to the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub relative_path: String,
    pub contents: String,
}

/// A fully emitted corpus
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Node modules in index order
    pub nodes: Vec<EmittedFile>,
    pub entry: EmittedFile,
    pub stats: CorpusStats,
}

/// Counters gathered while emitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct CorpusStats {
    pub graph: GraphStats,
    pub functions: usize,
    /// Functions whose body sums dependency calls
    pub calling_functions: usize,
    pub bytes: usize,
}

impl Corpus {
    /// Node files followed by the entry module
    pub fn files(&self) -> impl Iterator<Item = &EmittedFile> {
        self.nodes.iter().chain(std::iter::once(&self.entry))
    }

    pub fn file_count(&self) -> usize {
        self.nodes.len() + 1
    }
}

/// Emit every node module of `graph`.
///
/// In [`StreamMode::Sequential`] one stream seeded with `seed` is consumed
/// node by node in index order. In [`StreamMode::PerNode`] each node gets its
/// own stream and emission runs on the rayon pool; the output does not depend
/// on thread count.
pub fn emit_modules(
    graph: &DependencyGraph,
    options: &EmitOptions,
    seed: u64,
    mode: StreamMode,
) -> Vec<ModuleSource> {
    let width = index_width(graph.node_count());
    match mode {
        StreamMode::Sequential => {
            let mut rng = CorpusRng::from_seed(seed);
            (0..graph.node_count())
                .map(|node| emit_node(graph, node, width, options, &mut rng))
                .collect()
        }
        StreamMode::PerNode => (0..graph.node_count())
            .into_par_iter()
            .map(|node| {
                let mut rng = CorpusRng::for_node(seed, node);
                emit_node(graph, node, width, options, &mut rng)
            })
            .collect(),
    }
}

/// Build the full corpus described by `config`
pub fn build_corpus(config: &CorpusConfig) -> Result<Corpus> {
    config.validate()?;

    let graph = DependencyGraph::binary_tree(config.node_count);
    let graph_stats = graph.stats();
    info!(
        nodes = graph_stats.nodes,
        edges = graph_stats.edges,
        depth = graph_stats.depth,
        "Built dependency graph (binary tree)"
    );

    let modules = emit_modules(
        &graph,
        &config.emit_options(),
        config.seed,
        config.stream_mode,
    );

    let width = index_width(graph.node_count());
    let mut stats = CorpusStats {
        graph: graph_stats,
        ..Default::default()
    };

    let nodes: Vec<EmittedFile> = modules
        .iter()
        .map(|module| {
            stats.functions += module.functions.len();
            stats.calling_functions += module
                .functions
                .iter()
                .filter(|f| f.calls_dependencies())
                .count();
            let contents = module.render();
            stats.bytes += contents.len();
            EmittedFile {
                relative_path: module_path(module.node, width),
                contents,
            }
        })
        .collect();

    let entry = EmittedFile {
        relative_path: ENTRY_FILE.to_string(),
        contents: render_entry_module(width),
    };
    stats.bytes += entry.contents.len();

    debug!(
        functions = stats.functions,
        calling = stats.calling_functions,
        bytes = stats.bytes,
        "Emitted corpus in memory"
    );

    Ok(Corpus {
        nodes,
        entry,
        stats,
    })
}
