//! Seeded random stream threaded through emission
//!
//! The stream is always an explicit value passed by `&mut`, so the draws a
//! node consumes are visible from the call signature alone.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// How the random stream is laid out across nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StreamMode {
    /// One stream consumed in increasing node order. Emission must be sequential.
    #[default]
    Sequential,
    /// An independent stream per node derived from the seed and node index.
    /// Nodes can be emitted in any order or in parallel.
    PerNode,
}

/// Deterministic random source for one emission sequence
#[derive(Debug, Clone)]
pub struct CorpusRng {
    inner: ChaCha8Rng,
}

impl CorpusRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Independent stream for `node`. Distinct nodes get unrelated streams
    /// for the same seed.
    pub fn for_node(seed: u64, node: usize) -> Self {
        Self::from_seed(mix_seed(seed, node as u64))
    }

    /// Inclusive range draw, used for per-node function counts
    pub fn range(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    /// Uniform pick from a non-empty menu
    pub fn pick<'a, T>(&mut self, menu: &'a [T]) -> &'a T {
        &menu[self.inner.gen_range(0..menu.len())]
    }
}

/// SplitMix64 finalizer over `seed ^ node`, keeping nearby node indices
/// from producing correlated ChaCha seeds
fn mix_seed(seed: u64, node: u64) -> u64 {
    let mut z = seed ^ node.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
