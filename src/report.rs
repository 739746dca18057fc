//! Run summaries in text and JSON form

use crate::config::CorpusConfig;
use crate::corpus::CorpusStats;
use crate::error::{CorpusError, Result};
use crate::naming::ENTRY_FILE;
use crate::verify::VerificationReport;
use serde::Serialize;
use std::fmt::Write;

/// What a `generate` run produced
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub output_dir: String,
    pub entry: String,
    pub files: usize,
    pub seed: u64,
    pub stats: CorpusStats,
    pub bytes_written: usize,
    pub elapsed_ms: u64,
    /// Commands for benchmarking the compiler against the corpus
    pub benchmark_commands: Vec<String>,
}

impl GenerationSummary {
    pub fn new(config: &CorpusConfig, stats: CorpusStats, bytes_written: usize, elapsed_ms: u64) -> Self {
        Self {
            output_dir: config.output_dir.display().to_string(),
            entry: config.output_dir.join(ENTRY_FILE).display().to_string(),
            files: stats.graph.nodes + 1,
            seed: config.seed,
            stats,
            bytes_written,
            elapsed_ms,
            benchmark_commands: benchmark_commands(config),
        }
    }
}

/// Clean build, cold build and incremental rebuild of the entry module
pub fn benchmark_commands(config: &CorpusConfig) -> Vec<String> {
    let dir = config.output_dir.display();
    let compiler = &config.compiler;
    vec![
        format!("cd {}", dir),
        format!("{} clean", compiler),
        format!("time {} build {} -vv", compiler, ENTRY_FILE),
        format!("time {} build {} -vv  # incremental", compiler, ENTRY_FILE),
    ]
}

pub fn format_generation_text(summary: &GenerationSummary) -> String {
    let mut out = String::new();
    let stats = &summary.stats;
    let _ = writeln!(out, "Generated {} files in {}/", summary.files, summary.output_dir);
    let _ = writeln!(
        out,
        "  nodes: {}  edges: {}  depth: {}  leaves: {}",
        stats.graph.nodes, stats.graph.edges, stats.graph.depth, stats.graph.leaves
    );
    let _ = writeln!(
        out,
        "  functions: {} ({} call dependencies)",
        stats.functions, stats.calling_functions
    );
    let _ = writeln!(
        out,
        "  bytes: {}  seed: {}  time: {}ms",
        summary.bytes_written, summary.seed, summary.elapsed_ms
    );
    let _ = writeln!(out, "All files connected via binary tree structure");
    let _ = writeln!(out);
    let _ = writeln!(out, "Benchmark commands:");
    for command in &summary.benchmark_commands {
        let _ = writeln!(out, "  {}", command);
    }
    out
}

pub fn format_plan_text(stats: &CorpusStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Corpus plan (nothing written)");
    let _ = writeln!(out, "  files:     {}", stats.graph.nodes + 1);
    let _ = writeln!(out, "  edges:     {}", stats.graph.edges);
    let _ = writeln!(out, "  depth:     {}", stats.graph.depth);
    let _ = writeln!(out, "  leaves:    {}", stats.graph.leaves);
    let _ = writeln!(out, "  max fan-out: {}", stats.graph.max_fan_out);
    let _ = writeln!(
        out,
        "  functions: {} ({} call dependencies)",
        stats.functions, stats.calling_functions
    );
    let _ = writeln!(out, "  bytes:     {}", stats.bytes);
    out
}

pub fn format_verification_text(report: &VerificationReport) -> String {
    let mut out = String::new();
    if report.passed() {
        let _ = writeln!(
            out,
            "OK: all {} nodes reachable from {}, all edges point forward",
            report.nodes, ENTRY_FILE
        );
        return out;
    }

    let _ = writeln!(out, "FAILED: {}/{} nodes reachable", report.reached, report.nodes);
    if report.nodes == 0 {
        let _ = writeln!(out, "  {} would import a nonexistent root", ENTRY_FILE);
    }
    if !report.unreached.is_empty() {
        let preview: Vec<String> = report.unreached.iter().take(10).map(|i| i.to_string()).collect();
        let _ = writeln!(out, "  unreached: {}", preview.join(", "));
    }
    for (source, target) in &report.backward_edges {
        let _ = writeln!(out, "  backward edge: {} -> {}", source, target);
    }
    out
}

/// Pretty JSON for any summary type
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CorpusError::Serialization {
        message: format!("JSON serialization failed: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::build_corpus;
    use crate::graph::DependencyGraph;
    use crate::verify::verify_graph;

    #[test]
    fn test_benchmark_commands() {
        let commands = benchmark_commands(&CorpusConfig::default());
        assert_eq!(commands[0], "cd tests/benchmark");
        assert_eq!(commands[1], "../../zig-out/bin/comp clean");
        assert!(commands[3].ends_with("# incremental"));
    }

    #[test]
    fn test_generation_summary_json() {
        let config = CorpusConfig {
            node_count: 15,
            ..Default::default()
        };
        let corpus = build_corpus(&config).unwrap();
        let summary = GenerationSummary::new(&config, corpus.stats, corpus.stats.bytes, 3);

        let json: serde_json::Value = serde_json::from_str(&to_json(&summary).unwrap()).unwrap();
        assert_eq!(json["files"], 16);
        assert_eq!(json["stats"]["graph"]["edges"], 14);
        assert_eq!(json["seed"], 42);

        let text = format_generation_text(&summary);
        assert!(text.contains("Generated 16 files"));
        assert!(text.contains("Benchmark commands:"));
    }

    #[test]
    fn test_verification_text() {
        let ok = format_verification_text(&verify_graph(&DependencyGraph::binary_tree(9)));
        assert!(ok.starts_with("OK: all 9 nodes"));

        let empty = format_verification_text(&verify_graph(&DependencyGraph::binary_tree(0)));
        assert!(empty.starts_with("FAILED"));
        assert!(empty.contains("nonexistent root"));
    }
}
