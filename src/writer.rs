//! Persisting an emitted corpus
//!
//! Writing goes through [`CorpusSink`] so generation can be exercised without
//! a filesystem. [`FsSink`] is the real implementation: it optionally clears
//! the output root, creates parent directories on demand and overwrites
//! existing files. Writes are not atomic across files; an interrupted run
//! leaves a partial corpus that the next run replaces.

use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};
use crate::naming::{ENTRY_FILE, FILES_DIR};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for emitted files
pub trait CorpusSink {
    /// Prepare the destination before any file is written
    fn prepare(&mut self) -> Result<()>;

    /// Store one file at `relative_path`
    fn write_file(&mut self, relative_path: &str, contents: &str) -> Result<()>;
}

/// Writes the corpus under a root directory
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
    clean: bool,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>, clean: bool) -> Self {
        Self {
            root: root.into(),
            clean,
        }
    }
}

impl CorpusSink for FsSink {
    fn prepare(&mut self) -> Result<()> {
        if self.clean {
            cleanup(&self.root)?;
        }
        fs::create_dir_all(&self.root).map_err(|source| CorpusError::Write {
            path: self.root.clone(),
            source,
        })
    }

    fn write_file(&mut self, relative_path: &str, contents: &str) -> Result<()> {
        let file_path = self.root.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|source| CorpusError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&file_path, contents).map_err(|source| CorpusError::Write {
            path: file_path,
            source,
        })
    }
}

/// Keeps written files in memory, keyed by relative path
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
    pub prepared: bool,
}

impl CorpusSink for MemorySink {
    fn prepare(&mut self) -> Result<()> {
        self.files.clear();
        self.prepared = true;
        Ok(())
    }

    fn write_file(&mut self, relative_path: &str, contents: &str) -> Result<()> {
        self.files
            .insert(relative_path.to_string(), contents.to_string());
        Ok(())
    }
}

/// Removes the output directory if it exists.
///
/// Only an empty directory or one holding nothing but a previous corpus
/// (`main.mini` and `files/`) is removed. Anything else is refused so a
/// mistyped output path cannot wipe unrelated files.
pub fn cleanup(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }

    let clean_failed = |source| CorpusError::CleanFailed {
        path: output_dir.to_path_buf(),
        source,
    };
    let mut foreign = Vec::new();
    for entry in fs::read_dir(output_dir).map_err(clean_failed)? {
        let name = entry.map_err(clean_failed)?.file_name();
        if name != ENTRY_FILE && name != FILES_DIR {
            foreign.push(name.to_string_lossy().into_owned());
        }
    }

    if !foreign.is_empty() {
        foreign.sort();
        return Err(CorpusError::config(format!(
            "refusing to clean {}: it holds files that are not part of a corpus ({}); \
             choose another output directory or pass --no-clean",
            output_dir.display(),
            foreign.join(", ")
        )));
    }

    debug!(path = %output_dir.display(), "Removing existing output directory");
    fs::remove_dir_all(output_dir).map_err(clean_failed)
}

/// Write every node module, then the entry module. Returns bytes written.
pub fn write_corpus<S: CorpusSink>(corpus: &Corpus, sink: &mut S, progress: bool) -> Result<usize> {
    sink.prepare()?;

    let bar = if progress {
        let pb = ProgressBar::new(corpus.file_count() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut bytes = 0;
    for file in corpus.files() {
        sink.write_file(&file.relative_path, &file.contents)?;
        bytes += file.contents.len();
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(files = corpus.file_count(), bytes, "Wrote corpus");
    Ok(bytes)
}
