//! Pathfinding algorithms
//!
//! Breadth-first search over unit-weight edges. A single run from one source
//! yields a shortest-path tree: the distance of every reachable node and the
//! one predecessor it was first discovered from.

use super::common::{GraphView, NodeId};
use std::collections::VecDeque;

/// Result of a single-pair pathfinding query
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

/// Distances and predecessors produced by one BFS run.
///
/// Indexed by dense view index. A node is reachable iff `distance[idx]` is set;
/// the source is the only reachable node without a predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathTree {
    /// Dense index of the source
    pub source: usize,
    /// Hop count from the source, `None` when unreachable
    pub distance: Vec<Option<usize>>,
    /// Predecessor on the canonical shortest path
    pub predecessor: Vec<Option<usize>>,
    /// Reachable nodes in discovery (BFS layer) order, source first
    pub order: Vec<usize>,
}

impl ShortestPathTree {
    /// Number of nodes reached, including the source
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    pub fn is_reachable(&self, idx: usize) -> bool {
        self.distance.get(idx).map_or(false, Option::is_some)
    }

    /// Walk predecessor links back from `target`.
    ///
    /// Returns dense indices from the source to `target` inclusive, or `None`
    /// when `target` was not reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut curr = target;
        // Each step strictly lowers the distance, so the walk ends at the source
        while let Some(prev) = self.predecessor[curr] {
            path.push(prev);
            curr = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Single-source BFS producing a full shortest-path tree.
///
/// Neighbors are scanned in view order and a node keeps the predecessor that
/// discovered it first, so ties between equally short paths always resolve the
/// same way for the same view. Returns `None` if `source` is not in the view.
pub fn shortest_path_tree(view: &GraphView, source: NodeId) -> Option<ShortestPathTree> {
    let source_idx = view.index_of(source)?;

    let mut distance = vec![None; view.node_count];
    let mut predecessor = vec![None; view.node_count];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    distance[source_idx] = Some(0);
    order.push(source_idx);
    queue.push_back(source_idx);

    while let Some(current_idx) = queue.pop_front() {
        let next_distance = distance[current_idx].map_or(0, |d| d + 1);

        for &next_idx in view.neighbors(current_idx) {
            if distance[next_idx].is_none() {
                distance[next_idx] = Some(next_distance);
                predecessor[next_idx] = Some(current_idx);
                order.push(next_idx);
                queue.push_back(next_idx);
            }
        }
    }

    Some(ShortestPathTree {
        source: source_idx,
        distance,
        predecessor,
        order,
    })
}

/// Breadth-First Search (Unweighted Shortest Path) between two nodes
pub fn bfs(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    let target_idx = view.index_of(target)?;
    let tree = shortest_path_tree(view, source)?;
    let path: Vec<NodeId> = tree
        .path_to(target_idx)?
        .into_iter()
        .map(|idx| view.index_to_node[idx])
        .collect();

    Some(PathResult {
        source,
        target,
        cost: (path.len() - 1) as f64,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GraphView;

    /// Undirected view from an edge list over ids 1..=n
    fn undirected(n: u64, edges: &[(usize, usize)]) -> GraphView {
        let mut adjacency = vec![Vec::new(); n as usize];
        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        GraphView::from_adjacency_list((1..=n).collect(), adjacency)
    }

    #[test]
    fn test_bfs() {
        // 1-2-3
        let view = undirected(3, &[(0, 1), (1, 2)]);

        let result = bfs(&view, 1, 3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_bfs_same_node() {
        let view = undirected(2, &[(0, 1)]);
        let result = bfs(&view, 2, 2).unwrap();
        assert_eq!(result.path, vec![2]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_bfs_unreachable() {
        // 1-2   3
        let view = undirected(3, &[(0, 1)]);
        assert!(bfs(&view, 1, 3).is_none());
        assert!(bfs(&view, 1, 42).is_none());
        assert!(bfs(&view, 42, 1).is_none());
    }

    #[test]
    fn test_tree_distances_and_predecessors() {
        // 1-2, 2-3, 3-4, 1-4 (cycle of four)
        let view = undirected(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let tree = shortest_path_tree(&view, 1).unwrap();

        assert_eq!(tree.distance, vec![Some(0), Some(1), Some(2), Some(1)]);
        assert_eq!(tree.predecessor[0], None);
        // 3 is two hops either way; 2 was queued before 4 so it wins
        assert_eq!(tree.predecessor[2], Some(1));
        assert_eq!(tree.order, vec![0, 1, 3, 2]);
        assert_eq!(tree.reached(), 4);
    }

    #[test]
    fn test_tree_is_deterministic() {
        let view = undirected(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let first = shortest_path_tree(&view, 1).unwrap();
        let second = shortest_path_tree(&view, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path_to(4), Some(vec![0, 1, 3, 4]));
    }

    #[test]
    fn test_isolated_source() {
        let view = undirected(3, &[(1, 2)]);
        let tree = shortest_path_tree(&view, 1).unwrap();
        assert_eq!(tree.reached(), 1);
        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.path_to(2), None);
        assert!(!tree.is_reachable(7));
    }
}
