//! Command runners
//!
//! Each runner validates the settings, builds what it needs in memory and
//! returns a serializable summary. Only [`run_generate`] touches the disk.

use crate::config::CorpusConfig;
use crate::corpus::{build_corpus, CorpusStats};
use crate::error::{CorpusError, Result};
use crate::graph::DependencyGraph;
use crate::report::GenerationSummary;
use crate::verify::{verify_graph, VerificationReport};
use crate::writer::{write_corpus, FsSink};
use std::time::Instant;
use tracing::{info, warn};

/// Generate the corpus described by `config` and write it to its output directory
pub fn run_generate(config: &CorpusConfig, progress: bool) -> Result<GenerationSummary> {
    let start = Instant::now();
    info!(
        nodes = config.node_count,
        output = %config.output_dir.display(),
        seed = config.seed,
        "Generating corpus with connected dependency tree"
    );

    let corpus = build_corpus(config)?;

    let mut sink = FsSink::new(&config.output_dir, config.clean);
    let bytes_written = write_corpus(&corpus, &mut sink, progress)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(GenerationSummary::new(
        config,
        corpus.stats,
        bytes_written,
        elapsed_ms,
    ))
}

/// Emit the corpus in memory and report its shape
pub fn run_plan(config: &CorpusConfig) -> Result<CorpusStats> {
    let corpus = build_corpus(config)?;
    Ok(corpus.stats)
}

/// Validate the settings, then check reachability and edge direction for
/// the configured node count.
///
/// Returns the report alongside an error when either step fails, so callers
/// can still print the details.
pub fn run_verify(config: &CorpusConfig) -> std::result::Result<VerificationReport, (VerificationReport, CorpusError)> {
    let graph = DependencyGraph::binary_tree(config.node_count);
    let report = verify_graph(&graph);

    if let Err(e) = config.validate() {
        warn!("Refusing to verify an invalid configuration: {}", e);
        return Err((report, e));
    }

    if report.passed() {
        info!(nodes = report.nodes, "All nodes reachable from entry");
        return Ok(report);
    }

    warn!(
        unreached = report.unreached.len(),
        backward = report.backward_edges.len(),
        "Corpus failed verification"
    );
    let unreached = report.unreached.len();
    Err((report, CorpusError::Unreachable { unreached }))
}
