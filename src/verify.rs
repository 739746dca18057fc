//! Structural checks over the dependency graph
//!
//! Runs the reachability walk from the entry module and looks for edges that
//! break index ordering. Works on the in-memory graph only; emitted files are
//! never read back.

use crate::graph::DependencyGraph;
use serde::Serialize;

/// Outcome of checking a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub nodes: usize,
    pub reached: usize,
    /// Node indices the walk from the entry module never visits
    pub unreached: Vec<usize>,
    /// Edges `(source, target)` with `target <= source`
    pub backward_edges: Vec<(usize, usize)>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.nodes > 0 && self.unreached.is_empty() && self.backward_edges.is_empty()
    }
}

/// Walk the graph from the entry module (which imports node 0 only).
///
/// An empty graph fails: the entry module would point at a root that does
/// not exist.
pub fn verify_graph(graph: &DependencyGraph) -> VerificationReport {
    let unreached = graph.unreachable_nodes();
    VerificationReport {
        nodes: graph.node_count(),
        reached: graph.node_count() - unreached.len(),
        unreached,
        backward_edges: graph.backward_edges(),
    }
}
