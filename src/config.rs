//! Corpus generation settings
//!
//! Defaults reproduce the reference benchmark corpus: 10,000 nodes under
//! `tests/benchmark`, seed 42, two to four functions per node and a 0.7
//! chance that later functions call their dependencies. Settings can be
//! loaded from a TOML file; any field left out keeps its default.
//!
//! ```toml
//! node_count = 2000
//! output_dir = "bench/corpus"
//! seed = 7
//! stream_mode = "per-node"
//! ```

use crate::emitter::EmitOptions;
use crate::error::{CorpusError, Result};
use crate::random::StreamMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Number of node modules to generate
    pub node_count: usize,
    /// Root directory receiving `main.mini` and `files/`
    pub output_dir: PathBuf,
    pub seed: u64,
    /// Chance that a function past the first calls every dependency
    pub call_probability: f64,
    /// Smallest per-node function count (inclusive)
    pub min_functions: usize,
    /// Largest per-node function count (inclusive)
    pub max_functions: usize,
    pub stream_mode: StreamMode,
    /// Remove an existing output directory before writing
    pub clean: bool,
    /// Compiler binary named in the printed benchmark commands
    pub compiler: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            node_count: 10_000,
            output_dir: PathBuf::from("tests/benchmark"),
            seed: 42,
            call_probability: 0.7,
            min_functions: 2,
            max_functions: 4,
            stream_mode: StreamMode::Sequential,
            clean: true,
            compiler: "../../zig-out/bin/comp".to_string(),
        }
    }
}

impl CorpusConfig {
    /// Load settings from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CorpusError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| CorpusError::ConfigFile {
            path: path.to_path_buf(),
            message: format!("Failed to parse config: {}", e),
        })
    }

    /// Serialize the settings back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CorpusError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Reject settings that cannot produce a well-formed corpus
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(CorpusError::config(
                "node count must be greater than zero (the entry module would import a nonexistent root)",
            ));
        }
        if !(0.0..=1.0).contains(&self.call_probability) {
            return Err(CorpusError::config(format!(
                "call probability must be within [0, 1], got {}",
                self.call_probability
            )));
        }
        if self.min_functions == 0 {
            return Err(CorpusError::config(
                "every node needs at least one function (min_functions >= 1)",
            ));
        }
        if self.min_functions > self.max_functions {
            return Err(CorpusError::config(format!(
                "function range is empty: min {} > max {}",
                self.min_functions, self.max_functions
            )));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(CorpusError::config("output directory must not be empty"));
        }
        Ok(())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            call_probability: self.call_probability,
            functions_per_node: self.min_functions..=self.max_functions,
        }
    }
}
