//! Graph algorithms module
//!
//! Algorithms are implemented in the `kinpath-algorithms` crate over a dense
//! integer view. This module provides the integration/adapter layer.

use crate::graph::{FamilyGraph, IndividualId};
use kinpath_algorithms::GraphView;

// Re-export algorithms
pub use kinpath_algorithms::{bfs, shortest_path_tree, PathResult, ShortestPathTree};

/// Build a traversal view of the family graph.
///
/// Individual ids are already dense, so view index `i` is `IndividualId(i)`.
/// Each row lists parents and children in edge insertion order.
pub fn build_view(graph: &FamilyGraph) -> GraphView {
    let mut index_to_node = Vec::with_capacity(graph.individual_count());
    let mut adjacency = Vec::with_capacity(graph.individual_count());

    for (id, _) in graph.individuals() {
        index_to_node.push(id.as_u64());
        adjacency.push(
            graph
                .neighbor_ids(id)
                .map(|n: IndividualId| n.as_u64() as usize)
                .collect(),
        );
    }

    GraphView::from_adjacency_list(index_to_node, adjacency)
}
