//! corpus-builder: deterministic `.mini` corpora for incremental compiler benchmarks
//!
//! Generates a tree of interdependent modules where every file is reachable
//! from a single entry module (`main.mini`). Each node's first function calls
//! the first function of every module it imports, so running the entry
//! function executes code from the whole corpus.
//!
//! # Example
//!
//! ```no_run
//! use corpus_builder::{build_corpus, write_corpus, CorpusConfig, FsSink};
//!
//! let config = CorpusConfig {
//!     node_count: 1_000,
//!     ..Default::default()
//! };
//! let corpus = build_corpus(&config)?;
//! let mut sink = FsSink::new(&config.output_dir, config.clean);
//! write_corpus(&corpus, &mut sink, false)?;
//! # Ok::<(), corpus_builder::CorpusError>(())
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod naming;
pub mod random;
pub mod report;
pub mod runner;
pub mod verify;
pub mod writer;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::CorpusConfig;
pub use corpus::{build_corpus, emit_modules, Corpus, CorpusStats, EmittedFile};
pub use emitter::{
    build_module, emit_node, render_entry_module, EmitOptions, FunctionBody, FunctionDef,
    ImportDecl, ModuleSource,
};
pub use error::{CorpusError, Result};
pub use graph::{DependencyGraph, GraphStats};
pub use random::{CorpusRng, StreamMode};
pub use report::GenerationSummary;
pub use verify::{verify_graph, VerificationReport};
pub use writer::{write_corpus, CorpusSink, FsSink, MemorySink};
