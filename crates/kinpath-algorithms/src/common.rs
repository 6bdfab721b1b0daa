//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the traversal topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the traversal graph in Compressed Sparse Row (CSR) format.
///
/// The view stores a single adjacency relation. Callers decide what "adjacent"
/// means (children only, parents only, or both) when they build it; the
/// algorithms only ever step along `neighbors`.
///
/// Neighbor order is preserved exactly as supplied, so any algorithm that
/// breaks ties by iteration order is reproducible across runs.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from per-node adjacency lists.
    ///
    /// `adjacency[i]` lists the dense indices adjacent to `index_to_node[i]`.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());

        offsets.push(0);
        for neighbors in adjacency.into_iter().take(node_count) {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }
        // Nodes without an adjacency row have no neighbors
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node, in insertion order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Resolve a NodeId to its dense index
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Total number of adjacency entries (each undirected edge counts twice)
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }
}
