//! CLI argument definitions using clap with subcommand architecture

use crate::config::CorpusConfig;
use crate::error::Result;
use crate::random::StreamMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Deterministic .mini corpus generator for incremental compiler benchmarks
#[derive(Parser, Debug)]
#[command(name = "corpus-builder")]
#[command(about = "Generate a connected, deterministic .mini module corpus for compiler benchmarks")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show a progress bar while writing files
    #[arg(long, global = true)]
    pub progress: bool,

    /// Load settings from a TOML file; flags override file values
    #[arg(short, long, value_name = "FILE", global = true, env = "CORPUS_BUILDER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the graph, emit every module and write the corpus
    #[command(visible_alias = "g")]
    Generate(CorpusArgs),

    /// Emit the corpus in memory and print statistics without writing
    Plan(CorpusArgs),

    /// Check that every node is reachable from the entry module
    Verify(CorpusArgs),
}

/// Corpus settings shared by every subcommand
#[derive(Args, Debug, Default, Clone)]
pub struct CorpusArgs {
    /// Number of node modules
    #[arg(short = 'n', long, value_name = "N")]
    pub nodes: Option<usize>,

    /// Output root directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Seed for the random stream
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance that functions past the first call every dependency
    #[arg(long, value_name = "P")]
    pub call_probability: Option<f64>,

    /// Minimum functions per node (inclusive)
    #[arg(long, value_name = "K")]
    pub min_functions: Option<usize>,

    /// Maximum functions per node (inclusive)
    #[arg(long, value_name = "K")]
    pub max_functions: Option<usize>,

    /// Layout of the random stream across nodes
    #[arg(long, value_enum)]
    pub stream_mode: Option<StreamMode>,

    /// Keep an existing output directory instead of removing it first
    #[arg(long)]
    pub no_clean: bool,

    /// Compiler binary named in the printed benchmark commands
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<String>,
}

/// Output format for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON for machine parsing
    Json,
}

impl CorpusArgs {
    /// Overlay explicitly passed flags on top of `config`
    pub fn apply(&self, config: &mut CorpusConfig) {
        if let Some(nodes) = self.nodes {
            config.node_count = nodes;
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(p) = self.call_probability {
            config.call_probability = p;
        }
        if let Some(min) = self.min_functions {
            config.min_functions = min;
        }
        if let Some(max) = self.max_functions {
            config.max_functions = max;
        }
        if let Some(mode) = self.stream_mode {
            config.stream_mode = mode;
        }
        if self.no_clean {
            config.clean = false;
        }
        if let Some(compiler) = &self.compiler {
            config.compiler = compiler.clone();
        }
    }
}

impl Cli {
    pub fn corpus_args(&self) -> &CorpusArgs {
        match &self.command {
            Commands::Generate(args) | Commands::Plan(args) | Commands::Verify(args) => args,
        }
    }

    /// Defaults, then the config file (if any), then command-line flags
    pub fn resolve_config(&self) -> Result<CorpusConfig> {
        let mut config = match &self.config {
            Some(path) => CorpusConfig::load_from(path)?,
            None => CorpusConfig::default(),
        };
        self.corpus_args().apply(&mut config);
        Ok(config)
    }
}
