//! Dependency graph over corpus nodes
//!
//! Nodes are plain indices in `[0, n)`. Node `i` imports `2i + 1` and
//! `2i + 2` (when they exist), which lays the corpus out as a complete binary
//! tree rooted at node 0:
//!
//! - every edge points to a strictly greater index, so the graph is acyclic
//! - every node except 0 has exactly one parent with a smaller index, so the
//!   whole corpus is reachable from the root
//! - fan-out is at most two and depth grows with `log2(n)`

use serde::Serialize;
use std::collections::VecDeque;

/// Maximum number of imports any node carries
pub const MAX_FAN_OUT: usize = 2;

/// Directed import graph, `deps[i]` lists the nodes `i` imports in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    deps: Vec<Vec<usize>>,
}

/// Shape summary of a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes with no imports
    pub leaves: usize,
    /// Number of levels below and including the root
    pub depth: usize,
    pub max_fan_out: usize,
}

impl DependencyGraph {
    /// Build the binary-tree graph over `node_count` nodes.
    ///
    /// `node_count == 0` yields an empty graph; callers are expected to have
    /// rejected that configuration already.
    pub fn binary_tree(node_count: usize) -> Self {
        let deps = (0..node_count)
            .map(|i| {
                tree_children(i)
                    .into_iter()
                    .filter(|&child| child < node_count)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { deps }
    }

    pub fn node_count(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Ordered import targets of `node`; empty for out-of-range indices
    pub fn dependencies(&self, node: usize) -> &[usize] {
        self.deps.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All `(source, target)` edges in source order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.deps
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| targets.iter().map(move |&target| (source, target)))
    }

    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(Vec::len).sum()
    }

    /// Breadth-first walk from node 0. Returns `visited[i] == true` for every
    /// node the walk reaches.
    pub fn reachable_from_root(&self) -> Vec<bool> {
        let mut visited = vec![false; self.node_count()];
        if self.is_empty() {
            return visited;
        }

        let mut queue = VecDeque::from([0usize]);
        while let Some(current) = queue.pop_front() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            for &next in self.dependencies(current) {
                if !visited[next] {
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    /// Nodes the root walk never reaches, in index order
    pub fn unreachable_nodes(&self) -> Vec<usize> {
        self.reachable_from_root()
            .iter()
            .enumerate()
            .filter_map(|(i, &seen)| (!seen).then_some(i))
            .collect()
    }

    /// Edges whose target does not have a greater index than the source
    pub fn backward_edges(&self) -> Vec<(usize, usize)> {
        self.edges().filter(|&(source, target)| target <= source).collect()
    }

    /// Number of tree levels; 0 for an empty graph
    pub fn depth(&self) -> usize {
        let n = self.node_count();
        if n == 0 {
            return 0;
        }
        // Level of node i is floor(log2(i + 1)); the deepest node is n - 1
        n.ilog2() as usize + 1
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            leaves: self.deps.iter().filter(|d| d.is_empty()).count(),
            depth: self.depth(),
            max_fan_out: self.deps.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}

fn tree_children(node: usize) -> [usize; MAX_FAN_OUT] {
    [node * 2 + 1, node * 2 + 2]
}
