//! Common test utilities for corpus-builder integration tests
//!
//! This module provides:
//! - `CorpusDir` for generating a corpus into a temporary directory
//! - Helpers that read emitted files back and walk their import lines

#![allow(dead_code)]

pub mod corpus_dir;

pub use corpus_dir::{parse_imports, walk_from_entry, CorpusDir, ImportLine};
